use std::sync::Arc;

use super::labels;
use crate::analyzer::testutil::{dictionary_with_user, shared};
use crate::analyzer::{Analyzer, AnalyzerOptions, Granularity, TokenKind};
use crate::dict::{PosTag, PosType};

fn analyzer(granularity: Granularity) -> Analyzer {
    Analyzer::with_options(
        shared(),
        AnalyzerOptions {
            granularity,
            normalize: true,
        },
    )
}

#[test]
fn test_markers() {
    let tokens = analyzer(Granularity::Compound).analyze("것").unwrap();
    let bos = &tokens[0];
    let eos = &tokens[tokens.len() - 1];
    assert_eq!(bos.kind, TokenKind::Bos);
    assert_eq!(bos.surface, "BOS");
    assert_eq!((bos.offset, bos.length), (0, 0));
    assert_eq!(bos.pos_tags, vec![PosTag::UNKNOWN]);
    assert_eq!(eos.kind, TokenKind::Eos);
    assert_eq!(eos.surface, "EOS");
    assert_eq!((eos.offset, eos.length), ("것".len(), 0));
    assert!(bos.is_marker() && eos.is_marker());
    assert!(!tokens[1].is_marker());
}

#[test]
fn test_inflected_compound_mode() {
    let tokens = analyzer(Granularity::Compound).analyze("했다").unwrap();
    assert_eq!(labels(&tokens), vec!["BOS/UNKNOWN", "했다/VV+E", "EOS/UNKNOWN"]);
    let t = &tokens[1];
    assert_eq!(t.pos_type, PosType::Inflect);
    assert_eq!(t.expressions.len(), 3);
    assert_eq!((t.offset, t.length), (0, 6));
}

#[test]
fn test_inflected_decompose_mode_shares_span() {
    let tokens = analyzer(Granularity::Decompose).analyze("했다").unwrap();
    assert_eq!(
        labels(&tokens),
        vec!["BOS/UNKNOWN", "하/VV", "았/E", "다/E", "EOS/UNKNOWN"]
    );
    for t in &tokens[1..4] {
        assert_eq!((t.offset, t.length), (0, 6));
        assert_eq!(t.pos_type, PosType::Morpheme);
        assert_eq!((t.left_id, t.right_id, t.word_cost), (7, 7, 2000));
        assert!(t.expressions.is_empty());
        assert_eq!(t.kind, TokenKind::Known);
    }
}

#[test]
fn test_mixed_mode() {
    let tokens = analyzer(Granularity::Mixed).analyze("했다").unwrap();
    assert_eq!(
        labels(&tokens),
        vec!["BOS/UNKNOWN", "했다/VV+E", "하/VV", "았/E", "다/E", "EOS/UNKNOWN"]
    );
}

#[test]
fn test_compound_decompose_splits_span() {
    let dict = Arc::new(dictionary_with_user("가락지나물 가락지 나물"));
    let analyzer = Analyzer::with_options(
        dict,
        AnalyzerOptions {
            granularity: Granularity::Decompose,
            normalize: true,
        },
    );
    let tokens = analyzer.analyze("가락지나물").unwrap();
    assert_eq!(
        labels(&tokens),
        vec!["BOS/UNKNOWN", "가락지/NNG", "나물/NNG", "EOS/UNKNOWN"]
    );
    assert_eq!((tokens[1].offset, tokens[1].length), (0, 9));
    assert_eq!((tokens[2].offset, tokens[2].length), (9, 6));
    assert_eq!(tokens[1].kind, TokenKind::User);
}

#[test]
fn test_morphemes_ignore_granularity() {
    for g in [Granularity::Compound, Granularity::Decompose, Granularity::Mixed] {
        let tokens = analyzer(g).analyze("한국은").unwrap();
        assert_eq!(
            labels(&tokens),
            vec!["BOS/UNKNOWN", "한국/NNP", "은/J", "EOS/UNKNOWN"]
        );
    }
}

#[test]
fn test_granularity_from_str() {
    assert_eq!("mixed".parse::<Granularity>(), Ok(Granularity::Mixed));
    assert_eq!("Decompose".parse::<Granularity>(), Ok(Granularity::Decompose));
    assert!("split".parse::<Granularity>().is_err());
}
