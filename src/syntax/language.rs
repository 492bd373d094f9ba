use clap::ValueEnum;
use std::path::Path;
use tree_sitter::{Parser, Tree};

use crate::error::ParserError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    Javascript,
    Typescript,
    Tsx,
}

impl Language {
    /// Every file extension the scanner picks up.
    pub const EXTENSIONS: &'static [&'static str] =
        &["js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx"];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" | "mjs" | "cjs" | "jsx" => Some(Self::Javascript),
            "ts" | "mts" | "cts" => Some(Self::Typescript),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    pub fn detect(file_path: &Path) -> Option<Self> {
        file_path.extension()?.to_str().and_then(Self::from_extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Typescript => "typescript",
            Self::Tsx => "tsx",
        }
    }

    pub fn grammar(&self) -> tree_sitter::Language {
        match self {
            Self::Javascript => tree_sitter_javascript::LANGUAGE.into(),
            Self::Typescript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

pub fn parse_source(source: &str, language: Language) -> Result<Tree, ParserError> {
    let mut parser = Parser::new();
    parser
        .set_language(&language.grammar())
        .map_err(|_| ParserError::language_setup_failed(language.as_str()))?;
    parser
        .parse(source, None)
        .ok_or_else(|| ParserError::parse_failed(language.as_str()))
}
