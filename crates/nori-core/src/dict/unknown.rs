use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::entry::DictionaryEntry;
use super::pos::PosTag;
use crate::settings::settings;
use crate::unicode::CharClass;

/// How unknown words of a character class are proposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    /// Propose unknown words even where a dictionary word matched.
    pub invoke: bool,
    /// Propose the whole run of same-class characters as one word.
    pub group: bool,
    /// Also propose every length from 1 to `length`.
    pub length: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownClass {
    pub definition: CategoryDefinition,
    /// Context ids, cost and tags of the unknown word. `surface` is unused.
    pub entry: DictionaryEntry,
}

/// Unknown-word model, one definition per character class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownDictionary {
    classes: BTreeMap<CharClass, UnknownClass>,
}

impl UnknownDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        class: CharClass,
        definition: CategoryDefinition,
        left_id: u16,
        right_id: u16,
        word_cost: i32,
        pos_tag: PosTag,
    ) {
        let entry = DictionaryEntry::new("", left_id, right_id, word_cost, pos_tag);
        self.classes
            .insert(class, UnknownClass { definition, entry });
    }

    /// Definition for `class`, falling back to `Default`, then to a built-in
    /// single-character `UNKNOWN` word.
    pub fn resolve(&self, class: CharClass) -> &UnknownClass {
        self.classes
            .get(&class)
            .or_else(|| self.classes.get(&CharClass::Default))
            .unwrap_or_else(|| builtin())
    }

    pub fn iter(&self) -> impl Iterator<Item = (CharClass, &UnknownClass)> {
        self.classes.iter().map(|(class, def)| (*class, def))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

fn builtin() -> &'static UnknownClass {
    static BUILTIN: OnceLock<UnknownClass> = OnceLock::new();
    BUILTIN.get_or_init(|| UnknownClass {
        definition: CategoryDefinition {
            invoke: false,
            group: false,
            length: 1,
        },
        entry: DictionaryEntry::new("", 0, 0, settings().cost.unknown_word_cost, PosTag::UNKNOWN),
    })
}
