use super::{kana_mapping, romaji_mapping};
use crate::mapping::{Direction, Mapping, MappingError, Segment};

#[test]
fn parse_single_keys() {
    let m = kana_mapping();
    for (surface, underlying) in m.pairs(Direction::Parse) {
        assert_eq!(m.parse(surface), underlying, "surface={surface}");
    }
}

#[test]
fn emit_single_keys() {
    let m = kana_mapping();
    for (underlying, surface) in m.pairs(Direction::Emit) {
        assert_eq!(m.emit(underlying), surface, "underlying={underlying}");
    }
}

#[test]
fn parse_prefers_longest_key() {
    let m = kana_mapping();
    assert_eq!(m.parse("きゃ"), "KYA");
    assert_eq!(m.parse("きゃき"), "KYAKI");
    assert_eq!(m.parse("っかい"), "KKAI");
}

#[test]
fn emit_prefers_longest_key() {
    let m = kana_mapping();
    // "KYA" must not be read as "K" + "YA" or "KI"-anything
    assert_eq!(m.emit("KYAKA"), "きゃか");
    assert_eq!(m.emit("KKAN'"), "っかん");
}

#[test]
fn unmatched_characters_pass_through() {
    let m = kana_mapping();
    assert_eq!(m.parse("あxい"), "AxI");
    assert_eq!(m.parse("漢字"), "漢字");
    assert_eq!(m.parse("きょ"), "KIょ");
    assert_eq!(m.emit("A-I"), "あ-い");
}

#[test]
fn lone_sokuon_is_not_a_key() {
    let m = kana_mapping();
    assert_eq!(m.parse("っき"), "っKI");
}

#[test]
fn empty_input() {
    let m = kana_mapping();
    assert_eq!(m.parse(""), "");
    assert_eq!(m.emit(""), "");
    assert!(m.matches_surface_form(""));
    assert!(m.matches_underlying_form(""));
}

#[test]
fn in_map_is_parse_only() {
    let m = kana_mapping();
    assert_eq!(m.parse("ぁ"), "xa");
    assert_eq!(m.get(Direction::Parse, "ぁ"), Some("xa"));
    assert_eq!(m.get(Direction::Emit, "ぁ"), None);
}

#[test]
fn out_map_is_emit_only() {
    let m = kana_mapping();
    assert_eq!(m.emit("xa"), "ぁ");
    assert_eq!(m.get(Direction::Parse, "xa"), None);
}

#[test]
fn overrides_replace_base_entries() {
    let m = Mapping::new(
        [("を", "WO"), ("お", "O")],
        [("を", "O")],
        [("WO", "うぉ")],
    )
    .unwrap();
    assert_eq!(m.parse("を"), "O");
    assert_eq!(m.emit("WO"), "うぉ");
    assert_eq!(m.emit("O"), "お");
}

#[test]
fn out_map_resolves_inverted_conflict() {
    // あ and ア both parse to A; emitting A needs an explicit choice
    let m = Mapping::new([("あ", "A"), ("ア", "A")], [], [("A", "あ")]).unwrap();
    assert_eq!(m.parse("アあ"), "AA");
    assert_eq!(m.emit("A"), "あ");
}

#[test]
fn in_map_resolves_base_conflict() {
    // the base disagrees on を; the parse-only entry decides it
    let m = Mapping::new([("を", "WO"), ("を", "O")], [("を", "UO")], [("WO", "を")]).unwrap();
    assert_eq!(m.parse("を"), "UO");
    assert_eq!(m.get(Direction::Parse, "を"), Some("UO"));
    assert_eq!(m.emit("O"), "を");
}

#[test]
fn base_conflict_without_in_map_fails() {
    let err = Mapping::new([("を", "WO"), ("を", "O")], [], [("WO", "を")]).unwrap_err();
    assert_eq!(
        err,
        MappingError::DuplicateKey {
            direction: Direction::Parse,
            key: "を".into(),
            first: "WO".into(),
            second: "O".into(),
        }
    );
}

#[test]
fn inverted_conflict_without_override_fails() {
    let err = Mapping::bidirectional([("あ", "A"), ("ア", "A")]).unwrap_err();
    assert_eq!(
        err,
        MappingError::DuplicateKey {
            direction: Direction::Emit,
            key: "A".into(),
            first: "あ".into(),
            second: "ア".into(),
        }
    );
}

#[test]
fn conflicting_duplicate_in_one_set_fails() {
    let err = Mapping::new([("か", "KA")], [("を", "O"), ("を", "WO")], []).unwrap_err();
    assert!(matches!(
        err,
        MappingError::DuplicateKey {
            direction: Direction::Parse,
            ..
        }
    ));
}

#[test]
fn identical_duplicates_are_tolerated() {
    let m = Mapping::bidirectional([("か", "KA"), ("か", "KA")]).unwrap();
    assert_eq!(m.accepted_surface_keys().count(), 1);
}

#[test]
fn empty_key_in_in_map_fails() {
    let err = Mapping::new([("あ", "A")], [("", "X")], []).unwrap_err();
    assert_eq!(
        err,
        MappingError::EmptyKey {
            direction: Direction::Parse
        }
    );
}

#[test]
fn empty_key_in_out_map_fails() {
    let err = Mapping::new([("あ", "A")], [], [("", "x")]).unwrap_err();
    assert_eq!(
        err,
        MappingError::EmptyKey {
            direction: Direction::Emit
        }
    );
}

#[test]
fn empty_underlying_in_base_fails() {
    // the inverted pair would have an empty emit key
    let err = Mapping::bidirectional([("あ", "")]).unwrap_err();
    assert_eq!(
        err,
        MappingError::EmptyKey {
            direction: Direction::Emit
        }
    );
}

#[test]
fn empty_mapping_passes_everything_through() {
    let m = Mapping::bidirectional(Vec::<(&str, &str)>::new()).unwrap();
    assert_eq!(m.parse("あいう"), "あいう");
    assert_eq!(m.emit("ABC"), "ABC");
    assert!(m.matches_surface_form(""));
    assert!(!m.matches_surface_form("あ"));
    assert!(!m.matches_underlying_form("A"));
}

#[test]
fn full_match_rejects_single_unknown_char() {
    let m = kana_mapping();
    assert!(m.matches_surface_form("あいかきゃ"));
    assert!(!m.matches_surface_form("あいxかきゃ"));
    assert!(!m.matches_surface_form("あいう"));
}

#[test]
fn full_match_underlying() {
    let m = kana_mapping();
    assert!(m.matches_underlying_form("KYAKKAN'"));
    assert!(!m.matches_underlying_form("KYAK"));
}

#[test]
fn full_match_finds_split_past_longest_key() {
    // greedy would take "AB" and strand "C"
    let m = Mapping::bidirectional([("p", "A"), ("q", "BC"), ("r", "AB")]).unwrap();
    assert!(m.matches_underlying_form("ABC"));
    assert!(m.matches_underlying_form("ABBC"));
    assert!(!m.matches_underlying_form("ABCB"));
    assert_eq!(m.emit("ABC"), "rC");
}

#[test]
fn segments_report_matches_and_pass_through() {
    let m = kana_mapping();
    let segments: Vec<Segment> = m.segments(Direction::Parse, "きゃ字あ").collect();
    assert!(segments[0].is_matched());
    assert!(!segments[1].is_matched());
    assert_eq!(
        segments,
        vec![
            Segment::Matched {
                source: "きゃ",
                target: "KYA"
            },
            Segment::Unmatched("字"),
            Segment::Matched {
                source: "あ",
                target: "A"
            },
        ]
    );
}

#[test]
fn enumeration() {
    let m = kana_mapping();
    let surface_keys: Vec<&str> = m.accepted_surface_keys().collect();
    assert!(surface_keys.contains(&"ぁ"));
    assert!(surface_keys.contains(&"きゃ"));
    assert_eq!(surface_keys.len(), 8);

    let underlying_keys: Vec<&str> = m.accepted_underlying_keys().collect();
    assert!(underlying_keys.contains(&"xa"));
    assert_eq!(underlying_keys.len(), 8);

    assert!(m.produced_underlying_values().any(|v| v == "xa"));
    assert!(m.produced_surface_values().any(|v| v == "ぁ"));
}

#[test]
fn chained_mappings_convert_kana_to_romaji() {
    let kana = Mapping::bidirectional([("あ", "A"), ("い", "I")]).unwrap();
    let romaji = Mapping::bidirectional([("a", "A"), ("i", "I")]).unwrap();
    assert_eq!(romaji.emit(&kana.parse("あい")), "ai");
}

#[test]
fn chained_mappings_with_shared_lemmas() {
    let kana = kana_mapping();
    let romaji = romaji_mapping();
    assert_eq!(romaji.emit(&kana.parse("きゃっかん")), "kyakkan'");
    assert_eq!(kana.emit(&romaji.parse("kyakkan'")), "きゃっかん");
}

#[test]
fn mapping_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Mapping>();

    let m = std::sync::Arc::new(kana_mapping());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let m = m.clone();
            std::thread::spawn(move || m.parse("きゃっか"))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "KYAKKA");
    }
}
