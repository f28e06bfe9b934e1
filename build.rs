fn main() {
    // Validate embedded pair tables at compile time.
    validate_pair_table("src/tables/hiragana.txt", include_str!("src/tables/hiragana.txt"));
    validate_pair_table(
        "src/tables/small_kana.txt",
        include_str!("src/tables/small_kana.txt"),
    );
}

fn validate_pair_table(path: &str, content: &str) {
    if content.split_whitespace().count() % 2 != 0 {
        panic!("{path} contains an unpaired token");
    }
}
