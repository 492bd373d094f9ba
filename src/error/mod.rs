mod config;
mod io;
mod parser;

pub use config::ConfigError;
pub use io::IoError;
pub use parser::ParserError;
