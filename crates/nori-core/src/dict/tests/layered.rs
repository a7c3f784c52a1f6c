use super::{sample_dict, USER_IDS};
use crate::dict::{
    load_dictionary, Dictionary, LoadError, Origin, OverridePolicy, UserDictionary,
};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn layered(user: &str) -> Dictionary {
    let user = UserDictionary::parse(user, &USER_IDS).unwrap();
    Dictionary::from_parts(sample_dict(), Some(user))
}

#[test]
fn test_lookup_all_lengths() {
    let dict = Dictionary::from_parts(sample_dict(), None);
    let text = chars("화학 이외");
    let cands = dict.lookup(&text, 0);
    let lens: Vec<usize> = cands.iter().map(|c| c.char_len).collect();
    assert_eq!(lens, vec![1, 2]);
    assert!(cands.iter().all(|c| c.origin == Origin::System));

    let cands = dict.lookup(&text, 3);
    assert_eq!(cands.len(), 3); // 이/NP, 이/J, 이외
}

#[test]
fn test_lookup_out_of_range_position() {
    let dict = Dictionary::from_parts(sample_dict(), None);
    let text = chars("화학");
    assert!(dict.lookup(&text, 2).is_empty());
    assert!(dict.lookup(&text, 10).is_empty());
}

#[test]
fn test_override_hides_shorter_system_entries() {
    let dict = layered("화학 화 학").with_override_policy(OverridePolicy::Override);
    let cands = dict.lookup(&chars("화학"), 0);
    assert_eq!(cands.len(), 1);
    assert_eq!(cands[0].origin, Origin::User);
    assert_eq!(cands[0].char_len, 2);
}

#[test]
fn test_override_keeps_longer_system_entries() {
    let dict = layered("가락지").with_override_policy(OverridePolicy::Override);
    let cands = dict.lookup(&chars("가락지나물"), 0);
    let found: Vec<(Origin, usize)> = cands.iter().map(|c| (c.origin, c.char_len)).collect();
    assert_eq!(found, vec![(Origin::User, 3), (Origin::System, 5)]);
}

#[test]
fn test_additive_lists_user_first() {
    let dict = layered("화학").with_override_policy(OverridePolicy::Additive);
    assert_eq!(dict.override_policy(), OverridePolicy::Additive);
    let cands = dict.lookup(&chars("화학"), 0);
    let found: Vec<(Origin, usize)> = cands.iter().map(|c| (c.origin, c.char_len)).collect();
    assert_eq!(
        found,
        vec![(Origin::User, 2), (Origin::System, 1), (Origin::System, 2)]
    );
}

#[test]
fn test_load_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let sys_path = dir.path().join("system.dic");
    let user_path = dir.path().join("user.txt");
    sample_dict().save(&sys_path).unwrap();
    std::fs::write(&user_path, "나물\n").unwrap();

    let dict = load_dictionary(&sys_path, Some(&user_path)).unwrap();
    assert_eq!(dict.user().map(UserDictionary::len), Some(1));
    assert_eq!(dict.system().stats().surfaces, 7);
    assert_eq!(dict.connection().num_ids(), 6);

    let without_user = Dictionary::load(&sys_path, None).unwrap();
    assert!(without_user.user().is_none());
}

#[test]
fn test_load_names_failing_system_file() {
    let dir = tempfile::tempdir().unwrap();
    let sys_path = dir.path().join("system.dic");
    std::fs::write(&sys_path, b"NRDX").unwrap();
    let err = Dictionary::load(&sys_path, None).err().unwrap();
    match &err {
        LoadError::System { path, source } => {
            assert_eq!(path, &sys_path);
            assert!(matches!(**source, LoadError::InvalidHeader));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("system.dic"));
}

#[test]
fn test_load_names_failing_user_file() {
    let dir = tempfile::tempdir().unwrap();
    let sys_path = dir.path().join("system.dic");
    let user_path = dir.path().join("user.txt");
    sample_dict().save(&sys_path).unwrap();
    std::fs::write(&user_path, "좋은\n나쁜 나 쁘\n").unwrap();

    let err = Dictionary::load(&sys_path, Some(&user_path)).err().unwrap();
    match err {
        LoadError::User { path, source } => {
            assert_eq!(path, user_path);
            assert!(matches!(*source, LoadError::UserDictionary { line: 2, .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_missing_system_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dictionary::load(&dir.path().join("nope.dic"), None).err().unwrap();
    assert!(matches!(err, LoadError::System { .. }));
}

#[test]
fn test_lookup_exact_follows_policy() {
    let dict = layered("이/NP");
    let cands = dict.lookup_exact("이");
    assert_eq!(cands.len(), 1);
    assert_eq!(cands[0].origin, Origin::User);
    assert_eq!(cands[0].char_len, 1);

    let dict = layered("이/NP").with_override_policy(OverridePolicy::Additive);
    let origins: Vec<Origin> = dict.lookup_exact("이").iter().map(|c| c.origin).collect();
    assert_eq!(origins, vec![Origin::User, Origin::System, Origin::System]);

    // no user entry, system entries show through
    assert_eq!(dict.lookup_exact("이외").len(), 1);
    assert!(dict.lookup_exact("없음").is_empty());
}
