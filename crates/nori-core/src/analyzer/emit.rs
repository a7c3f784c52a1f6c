use serde::Serialize;

use super::lattice::{Lattice, NodeId, NodeKind};
use super::Granularity;
use crate::dict::{DictionaryEntry, Expression, Origin, PosTag, PosType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Bos,
    Eos,
    Known,
    User,
    Unknown,
}

/// One analyzed morpheme. Owns its data; nothing borrows the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub surface: String,
    /// Byte offset in the analyzed (normalized) text.
    pub offset: usize,
    /// Byte length in the analyzed text.
    pub length: usize,
    pub left_id: u16,
    pub right_id: u16,
    pub word_cost: i32,
    pub pos_type: PosType,
    pub pos_tags: Vec<PosTag>,
    pub expressions: Vec<Expression>,
}

impl Token {
    fn marker(kind: TokenKind, offset: usize) -> Self {
        Self {
            kind,
            surface: if kind == TokenKind::Bos { "BOS" } else { "EOS" }.to_string(),
            offset,
            length: 0,
            left_id: 0,
            right_id: 0,
            word_cost: 0,
            pos_type: PosType::Morpheme,
            pos_tags: vec![PosTag::UNKNOWN],
            expressions: Vec::new(),
        }
    }

    fn from_entry(
        kind: TokenKind,
        surface: &str,
        (offset, length): (usize, usize),
        entry: &DictionaryEntry,
    ) -> Self {
        Self {
            kind,
            surface: surface.to_string(),
            offset,
            length,
            left_id: entry.left_id,
            right_id: entry.right_id,
            word_cost: entry.word_cost,
            pos_type: entry.pos_type,
            pos_tags: entry.pos_tags.clone(),
            expressions: entry.expressions.clone(),
        }
    }

    /// `pos_tags` joined with `+`, e.g. `VV+E`.
    pub fn pos_label(&self) -> String {
        let tags: Vec<&str> = self.pos_tags.iter().map(|t| t.as_str()).collect();
        tags.join("+")
    }

    pub fn is_marker(&self) -> bool {
        matches!(self.kind, TokenKind::Bos | TokenKind::Eos)
    }
}

/// Turn a BOS..EOS path into tokens, BOS and EOS markers included.
pub fn emit_tokens(lattice: &Lattice<'_>, path: &[NodeId], granularity: Granularity) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(path.len());
    for &id in path {
        let node = lattice.node(id);
        let (kind, entry) = match node.kind {
            NodeKind::Bos => {
                tokens.push(Token::marker(TokenKind::Bos, 0));
                continue;
            }
            NodeKind::Eos => {
                tokens.push(Token::marker(TokenKind::Eos, lattice.text().len()));
                continue;
            }
            NodeKind::Known {
                entry,
                origin: Origin::System,
            } => (TokenKind::Known, entry),
            NodeKind::Known {
                entry,
                origin: Origin::User,
            } => (TokenKind::User, entry),
            NodeKind::Unknown { entry, .. } => (TokenKind::Unknown, entry),
        };

        let token = Token::from_entry(kind, lattice.surface(id), lattice.byte_span(id), entry);
        if !entry.is_decomposable() || granularity == Granularity::Compound {
            tokens.push(token);
            continue;
        }
        let parts = split(&token);
        if granularity == Granularity::Mixed {
            tokens.push(token);
        }
        tokens.extend(parts);
    }
    tokens
}

/// Sub-tokens of a compound or inflected token.
///
/// When the expressions spell out the surface, each part gets its own byte
/// span; otherwise every part shares the parent span.
fn split(parent: &Token) -> Vec<Token> {
    let spelled: String = parent
        .expressions
        .iter()
        .map(|e| e.surface.as_str())
        .collect();
    let contiguous = spelled == parent.surface;

    let mut offset = parent.offset;
    parent
        .expressions
        .iter()
        .map(|e| {
            let span = if contiguous {
                let span = (offset, e.surface.len());
                offset += e.surface.len();
                span
            } else {
                (parent.offset, parent.length)
            };
            Token {
                kind: parent.kind,
                surface: e.surface.clone(),
                offset: span.0,
                length: span.1,
                left_id: parent.left_id,
                right_id: parent.right_id,
                word_cost: parent.word_cost,
                pos_type: PosType::Morpheme,
                pos_tags: vec![e.pos_tag],
                expressions: Vec::new(),
            }
        })
        .collect()
}
