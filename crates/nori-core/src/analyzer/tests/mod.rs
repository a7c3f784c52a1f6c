mod emit;
mod viterbi;

use super::Token;

/// `surface/TAGS` of every token, markers included.
pub(super) fn labels(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| format!("{}/{}", t.surface, t.pos_label()))
        .collect()
}
