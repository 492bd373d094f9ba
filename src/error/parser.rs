use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("unsupported file type: {path}")]
    UnsupportedFile { path: PathBuf },

    #[error("failed to set parser language: {language}")]
    LanguageSetupFailed { language: String },

    #[error("failed to parse {language} source")]
    ParseFailed { language: String },
}

impl ParserError {
    pub fn unsupported_file(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFile { path: path.into() }
    }

    pub fn language_setup_failed(language: impl Into<String>) -> Self {
        Self::LanguageSetupFailed {
            language: language.into(),
        }
    }

    pub fn parse_failed(language: impl Into<String>) -> Self {
        Self::ParseFailed {
            language: language.into(),
        }
    }
}
