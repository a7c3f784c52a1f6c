use serde::{Deserialize, Serialize};

use super::pos::{PosTag, PosType};

/// One constituent of a compound or inflected entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Expression {
    pub surface: String,
    pub pos_tag: PosTag,
}

impl Expression {
    pub fn new(surface: impl Into<String>, pos_tag: PosTag) -> Self {
        Self {
            surface: surface.into(),
            pos_tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub surface: String,
    pub left_id: u16,
    pub right_id: u16,
    /// Lower is more probable.
    pub word_cost: i32,
    pub pos_type: PosType,
    pub pos_tags: Vec<PosTag>,
    /// Empty unless the entry decomposes.
    pub expressions: Vec<Expression>,
}

impl DictionaryEntry {
    /// A single morpheme with one tag.
    pub fn new(
        surface: impl Into<String>,
        left_id: u16,
        right_id: u16,
        word_cost: i32,
        pos_tag: PosTag,
    ) -> Self {
        Self {
            surface: surface.into(),
            left_id,
            right_id,
            word_cost,
            pos_type: PosType::Morpheme,
            pos_tags: vec![pos_tag],
            expressions: Vec::new(),
        }
    }

    /// Attach a decomposition. `pos_tags` is left as is.
    pub fn decomposed(mut self, pos_type: PosType, expressions: Vec<Expression>) -> Self {
        self.pos_type = pos_type;
        self.expressions = expressions;
        self
    }

    pub fn with_tags(mut self, pos_tags: Vec<PosTag>) -> Self {
        self.pos_tags = pos_tags;
        self
    }

    pub fn first_tag(&self) -> PosTag {
        self.pos_tags.first().copied().unwrap_or(PosTag::UNKNOWN)
    }

    pub fn is_decomposable(&self) -> bool {
        self.pos_type != PosType::Morpheme && !self.expressions.is_empty()
    }
}
