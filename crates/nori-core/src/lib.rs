pub mod analyzer;
pub mod dict;
pub mod normalizer;
pub mod settings;
pub mod unicode;

pub use analyzer::{analyze, AnalysisError, Analyzer, AnalyzerOptions, Granularity, Token, TokenKind};
pub use dict::{load_dictionary, Dictionary, LoadError};
