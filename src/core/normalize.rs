/// Comparison key for names: whitespace runs collapsed to one space, ends
/// trimmed, lowercased. Only used for matching; stored names keep their casing.
///
/// `to_lowercase` is simple lowercasing, not full Unicode case folding:
/// `"STRASSE"` and `"straße"` stay distinct.
pub fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
