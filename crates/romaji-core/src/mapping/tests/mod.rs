mod basic;

use super::Mapping;

/// Small kana ↔ lemma table with overlapping keys (き / きゃ, っか).
pub(super) fn kana_mapping() -> Mapping {
    Mapping::new(
        [
            ("あ", "A"),
            ("い", "I"),
            ("か", "KA"),
            ("き", "KI"),
            ("きゃ", "KYA"),
            ("っか", "KKA"),
            ("ん", "N'"),
        ],
        [("ぁ", "xa")],
        [("xa", "ぁ")],
    )
    .unwrap()
}

/// Lemma ↔ romaji, keyed by the same lemmas as [`kana_mapping`].
pub(super) fn romaji_mapping() -> Mapping {
    Mapping::bidirectional([
        ("a", "A"),
        ("i", "I"),
        ("ka", "KA"),
        ("ki", "KI"),
        ("kya", "KYA"),
        ("kka", "KKA"),
        ("n'", "N'"),
    ])
    .unwrap()
}
