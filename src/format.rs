//! Turns raw model text into the HTML fragment stored and returned to callers.
//!
//! Sentence splitting is deliberately naive: the first `!` ends the lead and
//! every `". "` in the rest becomes a paragraph break, so "Dr. Smith" or
//! "3. 5" get broken too. Nothing is HTML-escaped.

pub const BREAK: &str = "<br><br>";
pub const SIGNATURE: &str = "<i>Best wishes from HR Dept. - T.A.C</i>";

/// Strip markdown bold markers the model tends to add despite instructions.
pub fn clean_markup(raw: &str) -> String {
    raw.replace("**", "")
}

/// True when there is nothing left to format once markup is stripped.
pub fn is_blank_generation(raw: &str) -> bool {
    clean_markup(raw).trim().is_empty()
}

pub fn format_greeting(raw: &str) -> String {
    let text = clean_markup(raw);

    let (lead, remainder) = match text.split_once('!') {
        Some((head, tail)) => (format!("<b>{head}!</b>"), tail.replace(". ", BREAK)),
        None => (format!("<b>{text}</b>"), String::new()),
    };

    // no signature after a clarification-only reply
    if !lead.trim().is_empty() && !remainder.trim().is_empty() {
        format!("{lead}{BREAK}{remainder}{BREAK}{SIGNATURE}")
    } else {
        format!("{lead}{BREAK}{remainder}")
    }
}
