//! Morphological analysis pipeline.
//!
//! raw text → normalize → `build_lattice` → `find_best_path` → `emit_tokens`

mod emit;
mod graphviz;
mod lattice;
#[cfg(test)]
pub(crate) mod testutil;
#[cfg(test)]
mod tests;
mod viterbi;

pub use emit::{emit_tokens, Token, TokenKind};
pub use graphviz::render_dot;
pub use lattice::{build_lattice, Lattice, LatticeNode, NodeId, NodeKind, BOS};
pub use viterbi::find_best_path;

use std::borrow::Cow;
use std::sync::Arc;

use serde::Deserialize;

use crate::dict::Dictionary;
use crate::normalizer::{decode_utf8, normalize, NormalizationError};
use crate::settings::settings;

/// How compound and inflected entries are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One token carrying its expressions.
    #[default]
    Compound,
    /// The expressions only.
    Decompose,
    /// The compound token followed by its expressions.
    Mixed,
}

impl std::str::FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compound" => Ok(Self::Compound),
            "decompose" => Ok(Self::Decompose),
            "mixed" => Ok(Self::Mixed),
            other => Err(format!(
                "unknown granularity `{other}` (expected compound, decompose or mixed)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Normalization(#[from] NormalizationError),
    #[error("no segmentation reaches the end of input (stuck after char {position})")]
    Unreachable { position: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    pub granularity: Granularity,
    /// Run the normalizer before analysis.
    pub normalize: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        let s = &settings().analyzer;
        Self {
            granularity: s.granularity,
            normalize: s.normalize,
        }
    }
}

/// Analyzer bound to a shared dictionary. Cheap to clone; every call owns
/// its own lattice, so one analyzer may serve many threads.
#[derive(Clone)]
pub struct Analyzer {
    dict: Arc<Dictionary>,
    options: AnalyzerOptions,
}

impl Analyzer {
    pub fn new(dict: Arc<Dictionary>) -> Self {
        Self::with_options(dict, AnalyzerOptions::default())
    }

    pub fn with_options(dict: Arc<Dictionary>, options: AnalyzerOptions) -> Self {
        Self { dict, options }
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dict
    }

    pub fn options(&self) -> AnalyzerOptions {
        self.options
    }

    /// Analyze `raw` into BOS, morphemes, EOS.
    pub fn analyze(&self, raw: &str) -> Result<Vec<Token>, AnalysisError> {
        run(&self.dict, self.options, raw)
    }

    pub fn analyze_bytes(&self, raw: &[u8]) -> Result<Vec<Token>, AnalysisError> {
        self.analyze(decode_utf8(raw)?)
    }

    /// The solved lattice of `raw` as a GraphViz document.
    pub fn lattice_dot(&self, raw: &str) -> Result<String, AnalysisError> {
        let text = prepare(self.options, raw);
        let mut lattice = build_lattice(&text, &self.dict);
        let path = find_best_path(&mut lattice, self.dict.connection())?;
        Ok(render_dot(&lattice, &path, self.dict.connection()))
    }
}

/// Analyze with default options.
pub fn analyze(dict: &Dictionary, raw: &str) -> Result<Vec<Token>, AnalysisError> {
    run(dict, AnalyzerOptions::default(), raw)
}

fn prepare(options: AnalyzerOptions, raw: &str) -> Cow<'_, str> {
    if options.normalize {
        Cow::Owned(normalize(raw))
    } else {
        Cow::Borrowed(raw)
    }
}

fn run(dict: &Dictionary, options: AnalyzerOptions, raw: &str) -> Result<Vec<Token>, AnalysisError> {
    let text = prepare(options, raw);
    let mut lattice = build_lattice(&text, dict);
    let path = find_best_path(&mut lattice, dict.connection())?;
    Ok(emit_tokens(&lattice, &path, options.granularity))
}
