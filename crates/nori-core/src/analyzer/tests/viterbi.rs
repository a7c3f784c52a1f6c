use crate::analyzer::testutil::{dictionary, system};
use crate::analyzer::{
    build_lattice, find_best_path, AnalysisError, Lattice, NodeId, NodeKind, BOS,
};
use crate::dict::{
    ConnectionMatrix, Dictionary, DictionaryEntry, Origin, OverridePolicy, PosTag, UserDictionary,
};

/// Cheapest BOS..EOS cost by trying every path.
fn exhaustive_min(lattice: &Lattice<'_>, matrix: &ConnectionMatrix) -> i64 {
    fn walk(
        lattice: &Lattice<'_>,
        matrix: &ConnectionMatrix,
        path: &mut Vec<NodeId>,
        best: &mut Option<i64>,
    ) {
        let last = *path.last().unwrap();
        if last == lattice.eos() {
            let cost = lattice.path_cost(path, matrix).unwrap();
            if best.map_or(true, |b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        let end = lattice.node(last).end;
        for (id, node) in lattice.nodes().iter().enumerate() {
            if id != BOS && node.boundary == end && (id == lattice.eos() || node.start >= end) {
                path.push(id);
                walk(lattice, matrix, path, best);
                path.pop();
            }
        }
    }
    let mut best = None;
    walk(lattice, matrix, &mut vec![BOS], &mut best);
    best.unwrap()
}

#[test]
fn test_best_path_is_minimal() {
    let dict = dictionary();
    for text in [
        "화학 이외의 것",
        "화학이외의것",
        "가락지나물",
        "한국은 화학, 했다",
        "이 뷁 nori 123",
    ] {
        let mut lattice = build_lattice(text, &dict);
        let path = find_best_path(&mut lattice, dict.connection()).unwrap();
        let cost = lattice.path_cost(&path, dict.connection()).unwrap();
        assert_eq!(cost, lattice.node(lattice.eos()).best_cost, "{text}");
        assert_eq!(cost, exhaustive_min(&lattice, dict.connection()), "{text}");
    }
}

#[test]
fn test_path_runs_bos_to_eos() {
    let dict = dictionary();
    let mut lattice = build_lattice("화학 이외의 것", &dict);
    let path = find_best_path(&mut lattice, dict.connection()).unwrap();
    assert_eq!(path.first(), Some(&BOS));
    assert_eq!(path.last(), Some(&lattice.eos()));
    let surfaces: Vec<&str> = path[1..path.len() - 1]
        .iter()
        .map(|&id| lattice.surface(id))
        .collect();
    assert_eq!(surfaces, vec!["화학", "이외", "의", "것"]);
    assert_eq!(lattice.node(lattice.eos()).best_cost, 5000);
}

#[test]
fn test_empty_text_path() {
    let dict = dictionary();
    let mut lattice = build_lattice("", &dict);
    let path = find_best_path(&mut lattice, dict.connection()).unwrap();
    assert_eq!(path, vec![BOS, lattice.eos()]);
}

#[test]
fn test_whitespace_only_text_path() {
    let dict = dictionary();
    let mut lattice = build_lattice("   ", &dict);
    let path = find_best_path(&mut lattice, dict.connection()).unwrap();
    assert_eq!(path.len(), 2);
}

#[test]
fn test_ties_keep_first_candidate() {
    // same cost and ids as the system entry
    let user = UserDictionary::from_entries(vec![DictionaryEntry::new(
        "화학",
        1,
        1,
        1000,
        PosTag::NNG,
    )]);
    let dict =
        Dictionary::from_parts(system(), Some(user)).with_override_policy(OverridePolicy::Additive);
    for _ in 0..3 {
        let mut lattice = build_lattice("화학", &dict);
        let path = find_best_path(&mut lattice, dict.connection()).unwrap();
        assert_eq!(path.len(), 3);
        assert!(matches!(
            lattice.node(path[1]).kind,
            NodeKind::Known {
                origin: Origin::User,
                ..
            }
        ));
    }
}

#[test]
fn test_path_cost_rejects_broken_paths() {
    let dict = dictionary();
    let mut lattice = build_lattice("화학", &dict);
    let path = find_best_path(&mut lattice, dict.connection()).unwrap();
    assert!(lattice.path_cost(&[], dict.connection()).is_none());
    assert!(lattice.path_cost(&path[1..], dict.connection()).is_none());
    assert!(lattice
        .path_cost(&[BOS, lattice.eos()], dict.connection())
        .is_none());
}

#[test]
fn test_unreachable_error_display() {
    let err = AnalysisError::Unreachable { position: 3 };
    assert!(err.to_string().contains('3'));
}
