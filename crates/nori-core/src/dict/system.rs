use std::collections::BTreeMap;

use serde::Serialize;

use super::connection::ConnectionMatrix;
use super::entry::DictionaryEntry;
use super::unknown::UnknownDictionary;
use super::user::UserEntryIds;
use super::{EntrySource, LoadError, Origin, PrefixMatch};

pub(super) const MAGIC: &[u8; 4] = b"NRDX";
pub(super) const VERSION: u8 = 1;
/// magic(4) + version(1) + reserved(3) + trie_len(4) + body_len(4)
/// + matrix_len(4) + checksum(4)
pub(super) const HEADER_SIZE: usize = 4 + 1 + 3 + 4 + 4 + 4 + 4;

/// Read-only system dictionary: trie index, entry groups, unknown-word
/// model, connection costs and the context ids for user words.
///
/// Group `i` holds every entry whose surface is the trie key with value `i`.
pub struct SystemDictionary {
    pub(super) trie: crawdad::Trie,
    pub(super) groups: Vec<Vec<DictionaryEntry>>,
    pub(super) unknown: UnknownDictionary,
    pub(super) matrix: ConnectionMatrix,
    pub(super) user_ids: UserEntryIds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DictionaryStats {
    pub surfaces: usize,
    pub entries: usize,
    pub unknown_classes: usize,
    pub num_ids: u16,
}

impl SystemDictionary {
    /// Build in memory. Entries are grouped by surface; each group is ordered
    /// by cost, keeping input order among equal costs.
    pub fn from_entries(
        entries: impl IntoIterator<Item = DictionaryEntry>,
        matrix: ConnectionMatrix,
        unknown: UnknownDictionary,
        user_ids: UserEntryIds,
    ) -> Result<Self, LoadError> {
        let mut by_surface: BTreeMap<String, Vec<DictionaryEntry>> = BTreeMap::new();
        for entry in entries {
            if entry.surface.is_empty() {
                return Err(LoadError::Build("entry with empty surface".to_string()));
            }
            by_surface
                .entry(entry.surface.clone())
                .or_default()
                .push(entry);
        }
        if by_surface.is_empty() {
            return Err(LoadError::Build("dictionary has no entries".to_string()));
        }

        let mut surfaces = Vec::with_capacity(by_surface.len());
        let mut groups = Vec::with_capacity(by_surface.len());
        for (surface, mut group) in by_surface {
            group.sort_by_key(|e| e.word_cost);
            surfaces.push(surface);
            groups.push(group);
        }

        let trie = build_trie(&surfaces).map_err(LoadError::Build)?;

        let dict = Self {
            trie,
            groups,
            unknown,
            matrix,
            user_ids,
        };
        dict.check_context_ids().map_err(LoadError::Build)?;
        Ok(dict)
    }

    /// Every context id must index the connection matrix.
    pub(super) fn check_context_ids(&self) -> Result<(), String> {
        let n = self.matrix.num_ids();
        let check = |what: &str, left: u16, right: u16| {
            if left >= n || right >= n {
                Err(format!(
                    "{what}: context ids ({left}, {right}) out of range for {n} ids"
                ))
            } else {
                Ok(())
            }
        };
        for entry in self.groups.iter().flatten() {
            check(&entry.surface, entry.left_id, entry.right_id)?;
        }
        for (class, def) in self.unknown.iter() {
            check(
                &format!("unknown class {class:?}"),
                def.entry.left_id,
                def.entry.right_id,
            )?;
        }
        let ids = &self.user_ids;
        check("user ids", ids.left_id_nng, ids.right_id_nng)?;
        check(
            "user ids",
            ids.right_id_nng_with_coda,
            ids.right_id_nng_without_coda,
        )?;
        Ok(())
    }

    pub fn unknown(&self) -> &UnknownDictionary {
        &self.unknown
    }

    pub fn connection(&self) -> &ConnectionMatrix {
        &self.matrix
    }

    pub fn user_entry_ids(&self) -> &UserEntryIds {
        &self.user_ids
    }

    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            surfaces: self.groups.len(),
            entries: self.groups.iter().map(Vec::len).sum(),
            unknown_classes: self.unknown.len(),
            num_ids: self.matrix.num_ids(),
        }
    }
}

impl EntrySource for SystemDictionary {
    fn origin(&self) -> Origin {
        Origin::System
    }

    fn lookup(&self, surface: &str) -> &[DictionaryEntry] {
        self.trie
            .exact_match(surface.chars())
            .and_then(|id| self.groups.get(id as usize))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn common_prefix_search(&self, input: &[char]) -> Vec<PrefixMatch<'_>> {
        self.trie
            .common_prefix_search(input.iter().copied())
            .filter_map(|(id, char_len)| {
                self.groups.get(id as usize).map(|entries| PrefixMatch {
                    char_len,
                    entries,
                })
            })
            .collect()
    }
}

/// Trie mapping the i-th surface to group `i`.
pub(super) fn build_trie<S: AsRef<str>>(surfaces: &[S]) -> Result<crawdad::Trie, String> {
    crawdad::Trie::from_records(
        surfaces
            .iter()
            .enumerate()
            .map(|(i, s)| (s.as_ref(), i as u32)),
    )
    .map_err(|e| e.to_string())
}
