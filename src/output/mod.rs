mod finding;
mod fixes;
mod formatter;

pub use finding::Finding;
pub use fixes::{apply_edits, fix_file};
pub use formatter::{JsonOutput, OutputFormatter};
