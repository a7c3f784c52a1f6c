use std::collections::BTreeSet;

use tracing::{debug, debug_span};

use crate::dict::{ConnectionMatrix, Dictionary, DictionaryEntry, Origin};
use crate::settings::settings;
use crate::unicode::{classify, group_unknown, CharClass};

/// Index of a node in `Lattice::nodes`.
pub type NodeId = usize;

/// The begin-of-sentence node is always the first slot.
pub const BOS: NodeId = 0;

#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    Bos,
    Eos,
    Known {
        entry: &'a DictionaryEntry,
        origin: Origin,
    },
    Unknown {
        entry: &'a DictionaryEntry,
        class: CharClass,
    },
}

/// A candidate morpheme spanning `[start, end)` in char positions.
#[derive(Debug, Clone)]
pub struct LatticeNode<'a> {
    pub start: usize,
    pub end: usize,
    /// Where the predecessor must end: `start` minus any whitespace run
    /// immediately before it.
    pub boundary: usize,
    pub kind: NodeKind<'a>,
    /// Extra cost for morphemes that rarely follow a space.
    pub space_cost: i32,
    /// Cheapest total cost from BOS, `i64::MAX` until reached.
    pub best_cost: i64,
    pub back: Option<NodeId>,
}

impl<'a> LatticeNode<'a> {
    fn new(start: usize, end: usize, boundary: usize, kind: NodeKind<'a>) -> Self {
        Self {
            start,
            end,
            boundary,
            kind,
            space_cost: 0,
            best_cost: i64::MAX,
            back: None,
        }
    }

    pub fn entry(&self) -> Option<&'a DictionaryEntry> {
        match self.kind {
            NodeKind::Known { entry, .. } | NodeKind::Unknown { entry, .. } => Some(entry),
            NodeKind::Bos | NodeKind::Eos => None,
        }
    }

    pub fn left_id(&self) -> u16 {
        self.entry().map_or(0, |e| e.left_id)
    }

    pub fn right_id(&self) -> u16 {
        self.entry().map_or(0, |e| e.right_id)
    }

    pub fn word_cost(&self) -> i32 {
        self.entry().map_or(0, |e| e.word_cost)
    }

    pub fn is_reached(&self) -> bool {
        self.best_cost != i64::MAX
    }
}

/// All candidate segmentations of one input text.
///
/// Whitespace characters never start or end a node; they only move a node's
/// `boundary` back so it connects to whatever precedes the whitespace.
pub struct Lattice<'a> {
    pub(crate) text: String,
    pub(crate) chars: Vec<char>,
    /// Byte offset of every char position, plus the text length.
    pub(crate) byte_offsets: Vec<usize>,
    pub(crate) nodes: Vec<LatticeNode<'a>>,
    /// starts_at[i] = nodes starting at char position i (EOS at `len`)
    pub(crate) starts_at: Vec<Vec<NodeId>>,
    /// ends_at[i] = nodes ending at char position i (BOS at 0)
    pub(crate) ends_at: Vec<Vec<NodeId>>,
    pub(crate) eos: NodeId,
}

/// Build the lattice for `text`.
///
/// Every dictionary match at every non-whitespace position becomes a node.
/// Unknown-word nodes are added where nothing matched or where the
/// character class asks for them, so every position is covered.
pub fn build_lattice<'a>(text: &str, dict: &'a Dictionary) -> Lattice<'a> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let _span = debug_span!("build_lattice", char_count = len).entered();
    let cfg = settings();
    let unknown = dict.system().unknown();

    let byte_offsets: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let mut lattice = Lattice {
        text: text.to_string(),
        chars,
        byte_offsets,
        nodes: Vec::new(),
        starts_at: vec![Vec::new(); len + 1],
        ends_at: vec![Vec::new(); len + 1],
        eos: 0,
    };

    let mut bos = LatticeNode::new(0, 0, 0, NodeKind::Bos);
    bos.best_cost = 0;
    lattice.nodes.push(bos);
    lattice.ends_at[0].push(BOS);

    for start in 0..len {
        if lattice.chars[start].is_whitespace() {
            continue;
        }
        let mut boundary = start;
        while boundary > 0 && lattice.chars[boundary - 1].is_whitespace() {
            boundary -= 1;
        }
        let after_space = boundary < start;
        let space_cost = |entry: &DictionaryEntry| {
            if after_space && cfg.cost.penalizes_after_space(entry.first_tag()) {
                cfg.cost.space_penalty
            } else {
                0
            }
        };

        let candidates = dict.lookup(&lattice.chars, start);
        for c in &candidates {
            let mut node = LatticeNode::new(
                start,
                start + c.char_len,
                boundary,
                NodeKind::Known {
                    entry: c.entry,
                    origin: c.origin,
                },
            );
            node.space_cost = space_cost(c.entry);
            lattice.push(node);
        }

        let class = classify(lattice.chars[start]);
        let def = unknown.resolve(class);
        if !candidates.is_empty() && !def.definition.invoke {
            continue;
        }
        let limit = cfg
            .unknown
            .max_group_chars
            .max(def.definition.length as usize);
        let window = &lattice.chars[start..len.min(start + limit)];
        let (run, group_class) = group_unknown(window);

        let mut spans = BTreeSet::new();
        if candidates.is_empty() {
            spans.insert((1, class));
        }
        spans.extend(
            (1..=def.definition.length as usize)
                .filter(|&l| l <= run)
                .map(|l| (l, class)),
        );
        if def.definition.group {
            spans.insert((run.min(cfg.unknown.max_group_chars), group_class));
        }
        for (l, class) in spans {
            let entry = &unknown.resolve(class).entry;
            let mut node = LatticeNode::new(
                start,
                start + l,
                boundary,
                NodeKind::Unknown { entry, class },
            );
            node.space_cost = space_cost(entry);
            lattice.push(node);
        }
    }

    let mut eos_boundary = len;
    while eos_boundary > 0 && lattice.chars[eos_boundary - 1].is_whitespace() {
        eos_boundary -= 1;
    }
    lattice.eos = lattice.nodes.len();
    lattice
        .nodes
        .push(LatticeNode::new(len, len, eos_boundary, NodeKind::Eos));
    lattice.starts_at[len].push(lattice.eos);

    debug!(nodes = lattice.nodes.len(), "lattice built");
    lattice
}

impl<'a> Lattice<'a> {
    fn push(&mut self, node: LatticeNode<'a>) {
        let id = self.nodes.len();
        self.starts_at[node.start].push(id);
        self.ends_at[node.end].push(id);
        self.nodes.push(node);
    }

    /// Number of chars in the text.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn nodes(&self) -> &[LatticeNode<'a>] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> &LatticeNode<'a> {
        &self.nodes[id]
    }

    pub fn eos(&self) -> NodeId {
        self.eos
    }

    pub fn starts_at(&self, position: usize) -> &[NodeId] {
        self.starts_at
            .get(position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn ends_at(&self, position: usize) -> &[NodeId] {
        self.ends_at
            .get(position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Byte offset and byte length of a node in `text()`.
    pub fn byte_span(&self, id: NodeId) -> (usize, usize) {
        let node = &self.nodes[id];
        let from = self.byte_offsets[node.start];
        let to = self.byte_offsets[node.end];
        (from, to - from)
    }

    /// Text covered by a node; empty for BOS and EOS.
    pub fn surface(&self, id: NodeId) -> &str {
        let (offset, length) = self.byte_span(id);
        &self.text[offset..offset + length]
    }

    /// Total cost of `path` from BOS to EOS, or `None` if consecutive
    /// nodes do not connect.
    pub fn path_cost(&self, path: &[NodeId], matrix: &ConnectionMatrix) -> Option<i64> {
        let (&first, rest) = path.split_first()?;
        if first != BOS || path.last() != Some(&self.eos) {
            return None;
        }
        let mut total = 0i64;
        let mut prev = &self.nodes[first];
        for &id in rest {
            let node = self.nodes.get(id)?;
            if node.boundary != prev.end {
                return None;
            }
            total += matrix.cost(prev.right_id(), node.left_id()) as i64
                + node.word_cost() as i64
                + node.space_cost as i64;
            prev = node;
        }
        Some(total)
    }
}
