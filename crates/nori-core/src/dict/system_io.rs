use std::collections::HashMap;
use std::fs::{self, File};
use std::path::Path;

use bincode::Options;
use memmap2::Mmap;
use serde::{Deserialize, Serialize};

use super::connection::ConnectionMatrix;
use super::entry::{DictionaryEntry, Expression};
use super::pos::{PosTag, PosType};
use super::system::{build_trie, SystemDictionary, HEADER_SIZE, MAGIC, VERSION};
use super::unknown::UnknownDictionary;
use super::user::UserEntryIds;
use super::LoadError;

/// Entry with strings replaced by string-table ids.
#[derive(Serialize, Deserialize)]
struct StoredEntry {
    left_id: u16,
    right_id: u16,
    word_cost: i32,
    pos_type: PosType,
    pos_tags: Vec<PosTag>,
    expressions: Vec<(u32, PosTag)>,
}

#[derive(Serialize, Deserialize)]
struct StoredBody {
    strings: Vec<String>,
    /// String id of each group's surface.
    surfaces: Vec<u32>,
    groups: Vec<Vec<StoredEntry>>,
    unknown: UnknownDictionary,
    user_ids: UserEntryIds,
}

#[derive(Default)]
struct StringTable {
    strings: Vec<String>,
    index: HashMap<String, u32>,
}

impl StringTable {
    fn intern(&mut self, s: &str) -> u32 {
        if let Some(&id) = self.index.get(s) {
            return id;
        }
        let id = self.strings.len() as u32;
        self.strings.push(s.to_string());
        self.index.insert(s.to_string(), id);
        id
    }
}

fn section_len(len: usize, what: &str) -> Result<u32, LoadError> {
    len.try_into()
        .map_err(|_| LoadError::Build(format!("{what} exceeds u32::MAX")))
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

impl SystemDictionary {
    pub fn to_bytes(&self) -> Result<Vec<u8>, LoadError> {
        let mut table = StringTable::default();
        let mut surfaces = Vec::with_capacity(self.groups.len());
        let mut groups = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            let Some(first) = group.first() else {
                return Err(LoadError::Build("empty entry group".to_string()));
            };
            surfaces.push(table.intern(&first.surface));
            groups.push(
                group
                    .iter()
                    .map(|e| StoredEntry {
                        left_id: e.left_id,
                        right_id: e.right_id,
                        word_cost: e.word_cost,
                        pos_type: e.pos_type,
                        pos_tags: e.pos_tags.clone(),
                        expressions: e
                            .expressions
                            .iter()
                            .map(|x| (table.intern(&x.surface), x.pos_tag))
                            .collect(),
                    })
                    .collect(),
            );
        }
        let body = StoredBody {
            strings: table.strings,
            surfaces,
            groups,
            unknown: self.unknown.clone(),
            user_ids: self.user_ids,
        };

        let trie_data = self.trie.serialize_to_vec();
        let body_data = bincode::serialize(&body).map_err(LoadError::Serialize)?;
        let matrix_data = self.matrix.to_bytes();

        let trie_len = section_len(trie_data.len(), "trie data")?;
        let body_len = section_len(body_data.len(), "entry data")?;
        let matrix_len = section_len(matrix_data.len(), "matrix data")?;

        let mut payload = Vec::with_capacity(trie_data.len() + body_data.len() + matrix_data.len());
        payload.extend_from_slice(&trie_data);
        payload.extend_from_slice(&body_data);
        payload.extend_from_slice(&matrix_data);
        let checksum = crc32fast::hash(&payload);

        let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&[0u8; 3]); // reserved
        buf.extend_from_slice(&trie_len.to_le_bytes());
        buf.extend_from_slice(&body_len.to_le_bytes());
        buf.extend_from_slice(&matrix_len.to_le_bytes());
        buf.extend_from_slice(&checksum.to_le_bytes());
        buf.extend_from_slice(&payload);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, LoadError> {
        if data.len() < 5 {
            return Err(LoadError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(LoadError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(LoadError::UnsupportedVersion(data[4]));
        }
        if data.len() < HEADER_SIZE {
            return Err(LoadError::InvalidHeader);
        }

        let trie_len = read_u32(data, 8) as usize;
        let body_len = read_u32(data, 12) as usize;
        let matrix_len = read_u32(data, 16) as usize;
        let checksum = read_u32(data, 20);

        let expected = HEADER_SIZE + trie_len + body_len + matrix_len;
        if data.len() != expected {
            return Err(LoadError::Corrupt(format!(
                "expected {expected} bytes, file has {}",
                data.len()
            )));
        }
        let actual = crc32fast::hash(&data[HEADER_SIZE..]);
        if actual != checksum {
            return Err(LoadError::Checksum {
                expected: checksum,
                actual,
            });
        }

        let trie_start = HEADER_SIZE;
        let body_start = trie_start + trie_len;
        let matrix_start = body_start + body_len;

        let matrix = ConnectionMatrix::from_bytes(&data[matrix_start..])?;
        let body: StoredBody = bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .with_limit(body_len as u64)
            .deserialize(&data[body_start..matrix_start])
            .map_err(LoadError::Deserialize)?;
        let groups = resolve_groups(&body)?;

        // The stored trie is never decoded directly: crawdad trusts its
        // length words. It must equal the trie rebuilt from the surfaces.
        let surfaces: Vec<&str> = groups.iter().map(|g| g[0].surface.as_str()).collect();
        let trie = build_trie(&surfaces).map_err(LoadError::Corrupt)?;
        if trie.serialize_to_vec() != data[trie_start..body_start] {
            return Err(LoadError::Corrupt(
                "trie section does not match the entry surfaces".to_string(),
            ));
        }

        let dict = Self {
            trie,
            groups,
            unknown: body.unknown,
            matrix,
            user_ids: body.user_ids,
        };
        dict.check_context_ids().map_err(LoadError::Corrupt)?;
        Ok(dict)
    }

    /// Open a dictionary file through a read-only memory map.
    ///
    /// Everything is decoded into owned memory; the map is dropped on return.
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The Mmap is dropped after decoding completes below.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|e| LoadError::io(path, e))?;
        Self::from_bytes(&mmap)
    }

    pub fn save(&self, path: &Path) -> Result<(), LoadError> {
        fs::write(path, self.to_bytes()?).map_err(|e| LoadError::io(path, e))
    }
}

fn resolve_groups(body: &StoredBody) -> Result<Vec<Vec<DictionaryEntry>>, LoadError> {
    if body.surfaces.len() != body.groups.len() {
        return Err(LoadError::Corrupt(format!(
            "{} surfaces for {} entry groups",
            body.surfaces.len(),
            body.groups.len()
        )));
    }
    let text = |id: u32| {
        body.strings
            .get(id as usize)
            .cloned()
            .ok_or_else(|| LoadError::Corrupt(format!("string id {id} out of range")))
    };

    let mut groups = Vec::with_capacity(body.groups.len());
    for (&surface_id, stored) in body.surfaces.iter().zip(&body.groups) {
        if stored.is_empty() {
            return Err(LoadError::Corrupt("empty entry group".to_string()));
        }
        let surface = text(surface_id)?;
        let mut group = Vec::with_capacity(stored.len());
        for e in stored {
            let expressions = e
                .expressions
                .iter()
                .map(|&(id, pos_tag)| Ok(Expression::new(text(id)?, pos_tag)))
                .collect::<Result<Vec<_>, LoadError>>()?;
            group.push(DictionaryEntry {
                surface: surface.clone(),
                left_id: e.left_id,
                right_id: e.right_id,
                word_cost: e.word_cost,
                pos_type: e.pos_type,
                pos_tags: e.pos_tags.clone(),
                expressions,
            });
        }
        groups.push(group);
    }
    Ok(groups)
}
