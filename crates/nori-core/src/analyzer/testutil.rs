//! Small reference dictionary shared by analyzer tests.
//!
//! Context ids: 0 BOS/EOS, 1 noun, 2 particle, 3 dependent noun,
//! 4 pronoun, 5 symbol, 6 unknown, 7 verb.

use std::sync::Arc;

use crate::dict::{
    CategoryDefinition, ConnectionMatrix, Dictionary, DictionaryEntry, Expression, PosTag,
    PosType, SystemDictionary, UnknownDictionary, UserDictionary, UserEntryIds,
};
use crate::unicode::CharClass;

pub(crate) const NUM_IDS: u16 = 8;

pub(crate) const USER_IDS: UserEntryIds = UserEntryIds {
    left_id_nng: 1,
    right_id_nng: 1,
    right_id_nng_with_coda: 1,
    right_id_nng_without_coda: 1,
};

pub(crate) fn entries() -> Vec<DictionaryEntry> {
    vec![
        DictionaryEntry::new("화학", 1, 1, 1000, PosTag::NNG),
        DictionaryEntry::new("화", 1, 1, 2500, PosTag::NNG),
        DictionaryEntry::new("학", 1, 1, 2500, PosTag::NNG),
        DictionaryEntry::new("이외", 1, 1, 1500, PosTag::NNG),
        DictionaryEntry::new("이", 2, 2, 1500, PosTag::J),
        DictionaryEntry::new("이", 4, 4, 2000, PosTag::NP),
        DictionaryEntry::new("외", 1, 1, 2500, PosTag::NNG),
        DictionaryEntry::new("의", 2, 2, 800, PosTag::J),
        DictionaryEntry::new("은", 2, 2, 900, PosTag::J),
        DictionaryEntry::new("것", 3, 3, 1200, PosTag::NNB),
        DictionaryEntry::new("가락지", 1, 1, 3000, PosTag::NNG),
        DictionaryEntry::new("나물", 1, 1, 2800, PosTag::NNG),
        DictionaryEntry::new("한국", 1, 1, 1500, PosTag::NNP),
        DictionaryEntry::new(",", 5, 5, 500, PosTag::SC),
        DictionaryEntry::new("했다", 7, 7, 2000, PosTag::VV)
            .with_tags(vec![PosTag::VV, PosTag::E])
            .decomposed(
                PosType::Inflect,
                vec![
                    Expression::new("하", PosTag::VV),
                    Expression::new("았", PosTag::E),
                    Expression::new("다", PosTag::E),
                ],
            ),
    ]
}

pub(crate) fn matrix() -> ConnectionMatrix {
    let mut m = ConnectionMatrix::zeroed(NUM_IDS);
    m.set(1, 1, 500);
    m.set(2, 2, 3000);
    m.set(0, 2, 2000);
    m
}

pub(crate) fn unknown() -> UnknownDictionary {
    let mut unk = UnknownDictionary::new();
    let single = CategoryDefinition {
        invoke: false,
        group: false,
        length: 1,
    };
    let grouped = CategoryDefinition {
        invoke: true,
        group: true,
        length: 0,
    };
    unk.insert(CharClass::Default, single, 6, 6, 9000, PosTag::UNKNOWN);
    unk.insert(CharClass::Hangul, single, 6, 6, 8000, PosTag::UNKNOWN);
    unk.insert(CharClass::Alpha, grouped, 6, 6, 4000, PosTag::SL);
    unk.insert(CharClass::Numeric, grouped, 6, 6, 3000, PosTag::SN);
    unk.insert(CharClass::Symbol, grouped, 5, 5, 4000, PosTag::SY);
    unk
}

pub(crate) fn system() -> SystemDictionary {
    SystemDictionary::from_entries(entries(), matrix(), unknown(), USER_IDS).unwrap()
}

pub(crate) fn dictionary() -> Dictionary {
    Dictionary::from_parts(system(), None)
}

pub(crate) fn dictionary_with_user(user: &str) -> Dictionary {
    let user = UserDictionary::parse(user, &USER_IDS).unwrap();
    Dictionary::from_parts(system(), Some(user))
}

pub(crate) fn shared() -> Arc<Dictionary> {
    Arc::new(dictionary())
}
