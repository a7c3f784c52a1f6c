mod layered;

use super::*;
use crate::unicode::CharClass;

pub(super) const USER_IDS: UserEntryIds = UserEntryIds {
    left_id_nng: 1,
    right_id_nng: 1,
    right_id_nng_with_coda: 2,
    right_id_nng_without_coda: 3,
};

pub(super) fn sample_entries() -> Vec<DictionaryEntry> {
    vec![
        DictionaryEntry::new("화학", 1, 1, 1000, PosTag::NNG),
        DictionaryEntry::new("화", 1, 1, 2500, PosTag::NNG),
        DictionaryEntry::new("학", 1, 1, 2500, PosTag::NNG),
        DictionaryEntry::new("이", 4, 4, 1500, PosTag::J),
        DictionaryEntry::new("이외", 1, 1, 1500, PosTag::NNG),
        DictionaryEntry::new("이", 1, 1, 1200, PosTag::NP),
        DictionaryEntry::new("가락지", 1, 1, 3000, PosTag::NNG),
        DictionaryEntry::new("가락지나물", 1, 1, 2000, PosTag::NNG).decomposed(
            PosType::Compound,
            vec![
                Expression::new("가락지", PosTag::NNG),
                Expression::new("나물", PosTag::NNG),
            ],
        ),
    ]
}

pub(super) fn sample_unknown() -> UnknownDictionary {
    let mut unk = UnknownDictionary::new();
    unk.insert(
        CharClass::Hangul,
        CategoryDefinition {
            invoke: false,
            group: false,
            length: 1,
        },
        5,
        5,
        8000,
        PosTag::UNKNOWN,
    );
    unk
}

pub(super) fn sample_dict() -> SystemDictionary {
    SystemDictionary::from_entries(
        sample_entries(),
        ConnectionMatrix::zeroed(6),
        sample_unknown(),
        USER_IDS,
    )
    .unwrap()
}
