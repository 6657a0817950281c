use super::*;

fn next(base: &str, siblings: &[&str]) -> String {
    generate_incremented_name(base, siblings, SuffixStyle::Underscore)
}

#[test]
fn test_leading_number_keeps_padding() {
    assert_eq!(next("01_Footage", &["01_Footage"]), "02_Footage");
    assert_eq!(next("01_Footage", &["01_Footage", "02_Footage"]), "03_Footage");
    assert_eq!(next("02_Footage", &["01_Footage", "02_Footage"]), "03_Footage");
    assert_eq!(next("009_x", &["009_x"]), "010_x");
}

#[test]
fn test_leading_number_without_separator() {
    assert_eq!(next("2024", &["2024"]), "2025");
    assert_eq!(next("1.txt", &["1.txt"]), "2.txt");
}

#[test]
fn test_trailing_number() {
    assert_eq!(next("SHOT_01", &["SHOT_01"]), "SHOT_02");
    assert_eq!(next("file2", &["file2"]), "file3");
    assert_eq!(next("SHOT_09", &["SHOT_09", "SHOT_10"]), "SHOT_11");
}

#[test]
fn test_no_number_appends_padded_suffix() {
    assert_eq!(next("notes", &["notes"]), "notes_01");
    assert_eq!(next("notes", &["notes", "notes_01"]), "notes_02");
}

#[test]
fn test_collisions_are_case_insensitive() {
    assert_eq!(next("SHOT_01", &["SHOT_01", "shot_02"]), "SHOT_03");
    assert_eq!(next("notes", &["notes", "NOTES_01"]), "notes_02");
}

#[test]
fn test_padding_grows_past_width() {
    assert_eq!(next("9_a", &["9_a"]), "10_a");
    assert_eq!(next("take_99", &["take_99"]), "take_100");
}

#[test]
fn test_space_style() {
    let style = SuffixStyle::Space;
    assert_eq!(generate_incremented_name("Item 2", &["Item 2"], style), "Item 3");
    assert_eq!(generate_incremented_name("notes", &["notes"], style), "notes 2");
    assert_eq!(
        generate_incremented_name("notes", &["notes", "notes 2"], style),
        "notes 3"
    );
    assert_eq!(generate_incremented_name("01_A", &["01_A"], style), "02_A");
}

#[test]
fn test_oversized_number_falls_back() {
    let huge = "999999999999999999999999999999999999999999";
    let name = next(huge, &[huge]);
    assert_eq!(name, format!("{huge}_01"));
}
