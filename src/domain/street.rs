/// Normalize a street name: trim and collapse whitespace runs to one space.
pub fn normalize_street_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}
