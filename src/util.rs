/// One-line preview of user text for log fields: whitespace runs collapse to a
/// single space and the result is cut at `max` characters with "…" appended.
pub fn preview(s: &str, max: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        flat
    } else {
        let cut: String = flat.chars().take(max).collect();
        format!("{cut}…")
    }
}
