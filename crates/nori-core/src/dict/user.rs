//! Plain-text user dictionary.
//!
//! One entry per line, `#` starts a comment:
//!
//! ```text
//! # surface[/TAG] [segment[/TAG] ...]
//! 세종
//! 세종시 세종 시
//! 가락지나물/NNG 가락지 나물
//! ```
//!
//! Without segments the line is a single morpheme; with segments it is a
//! compound whose segments must spell out the surface. Tags default to `NNG`.
//! Surfaces and segments are normalized like analyzed text before storage.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::entry::{DictionaryEntry, Expression};
use super::pos::{PosTag, PosType};
use super::{EntrySource, LoadError, Origin, PrefixMatch};
use crate::normalizer::normalize;
use crate::settings::settings;
use crate::unicode::check_coda;

/// Context ids given to user words. They are the ids of a general noun
/// (`NNG`); the right id depends on how the surface ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntryIds {
    pub left_id_nng: u16,
    /// Right id when the last character is not a Hangul syllable.
    pub right_id_nng: u16,
    pub right_id_nng_with_coda: u16,
    pub right_id_nng_without_coda: u16,
}

impl UserEntryIds {
    pub fn right_id_for(&self, surface: &str) -> u16 {
        match check_coda(surface) {
            (false, _) => self.right_id_nng,
            (true, true) => self.right_id_nng_with_coda,
            (true, false) => self.right_id_nng_without_coda,
        }
    }
}

#[derive(Debug, Default)]
pub struct UserDictionary {
    entries: BTreeMap<String, Vec<DictionaryEntry>>,
    /// Longest surface in chars, bounds prefix search.
    max_chars: usize,
}

impl UserDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse user dictionary text. Fails on the first malformed line.
    pub fn parse(text: &str, ids: &UserEntryIds) -> Result<Self, LoadError> {
        let word_cost = settings().user_dict.word_cost;
        let mut entries = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let entry = parse_line(line, ids, word_cost).map_err(|reason| {
                LoadError::UserDictionary {
                    line: line_no,
                    reason,
                }
            })?;
            entries.push(entry);
        }
        Ok(Self::from_entries(entries))
    }

    /// Read and parse a user dictionary file. An empty file is an empty
    /// dictionary.
    pub fn open(path: &Path, ids: &UserEntryIds) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let dict = Self::parse(&text, ids)?;
        debug!(path = %path.display(), words = dict.len(), "user dictionary parsed");
        Ok(dict)
    }

    /// Identical entries collapse into one; entries sharing a surface are
    /// kept in a canonical order independent of input order.
    pub fn from_entries(entries: impl IntoIterator<Item = DictionaryEntry>) -> Self {
        let mut map: BTreeMap<String, Vec<DictionaryEntry>> = BTreeMap::new();
        for entry in entries {
            if entry.surface.is_empty() {
                warn!("skipping user entry with empty surface");
                continue;
            }
            map.entry(entry.surface.clone()).or_default().push(entry);
        }
        let mut max_chars = 0;
        for (surface, group) in &mut map {
            let before = group.len();
            group.sort();
            group.dedup();
            if group.len() < before {
                warn!(
                    surface = surface.as_str(),
                    duplicates = before - group.len(),
                    "duplicate user dictionary entries ignored"
                );
            }
            max_chars = max_chars.max(surface.chars().count());
        }
        Self {
            entries: map,
            max_chars,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.values().flatten()
    }
}

/// Split `term` into surface and optional tag at the last `/`. The surface
/// is normalized the same way analyzed text is, so it can match.
fn parse_term(term: &str) -> Result<(String, Option<PosTag>), String> {
    let (raw, tag) = match term.rsplit_once('/') {
        Some((surface, name)) => {
            let tag = PosTag::from_name(name).ok_or_else(|| format!("unknown POS tag `{name}`"))?;
            (surface, Some(tag))
        }
        None => (term, None),
    };
    let surface = normalize(raw);
    if surface.is_empty() {
        return Err(format!("empty surface in `{term}`"));
    }
    if surface.contains(char::is_whitespace) {
        return Err(format!("surface `{raw}` normalizes to `{surface}`, which contains a space"));
    }
    Ok((surface, tag))
}

fn parse_line(line: &str, ids: &UserEntryIds, word_cost: i32) -> Result<DictionaryEntry, String> {
    let mut terms = line.split_whitespace();
    let head = terms.next().ok_or_else(|| "empty line".to_string())?;
    let (surface, tag) = parse_term(head)?;

    let mut expressions = Vec::new();
    for term in terms {
        let (segment, seg_tag) = parse_term(term)?;
        expressions.push(Expression::new(segment, seg_tag.unwrap_or(PosTag::NNG)));
    }

    let right_id = ids.right_id_for(&surface);
    let entry = DictionaryEntry::new(
        surface,
        ids.left_id_nng,
        right_id,
        word_cost,
        tag.unwrap_or(PosTag::NNG),
    );
    if expressions.is_empty() {
        return Ok(entry);
    }

    let joined: String = expressions.iter().map(|e| e.surface.as_str()).collect();
    if joined != entry.surface {
        return Err(format!(
            "segments `{joined}` do not spell out surface `{}`",
            entry.surface
        ));
    }
    Ok(entry.decomposed(PosType::Compound, expressions))
}

impl EntrySource for UserDictionary {
    fn origin(&self) -> Origin {
        Origin::User
    }

    fn lookup(&self, surface: &str) -> &[DictionaryEntry] {
        self.entries
            .get(surface)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn common_prefix_search(&self, input: &[char]) -> Vec<PrefixMatch<'_>> {
        let mut results = Vec::new();
        let mut key = String::new();
        for (i, &c) in input.iter().take(self.max_chars).enumerate() {
            key.push(c);
            if let Some(entries) = self.entries.get(&key) {
                results.push(PrefixMatch {
                    char_len: i + 1,
                    entries,
                });
            }
        }
        results
    }
}
