/// Playwright Tagging
///
/// Checks that every Playwright `test('<title>', ...)` declaration carries
/// tags, and that those tags come from the configured tag groups. Sources are
/// parsed with Tree-sitter; JavaScript, TypeScript and TSX are supported.
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;
pub mod rule;
pub mod scanner;
pub mod syntax;

pub use config::{load_config, TagRuleConfig};
pub use rule::{Diagnostic, DiagnosticKind, TagRule};
pub use scanner::{ScanResult, Scanner};
pub use syntax::Language;
