use std::sync::OnceLock;

use regex::Regex;

fn non_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\W+").expect("valid regex"))
}

fn trailing_digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.*?)(\d+)$").expect("valid regex"))
}

fn non_digit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\d]").expect("valid regex"))
}

/// Canonical lookup form of a player name: strip every non-word character
/// and lowercase. "Lebron James", "lebron-james" and "LEBRONJAMES" all map
/// to the same key.
pub fn normalize_name(name: &str) -> String {
    non_word_re().replace_all(name, "").to_lowercase()
}

/// The roster dataset glues the jersey number onto the name ("Joel Embiid21").
/// Split a trailing run of digits into the jersey; no trailing digits means
/// no jersey.
pub fn split_name_and_jersey(raw: &str) -> (String, String) {
    let trimmed = raw.trim();
    match trailing_digits_re().captures(trimmed) {
        Some(caps) => (caps[1].trim().to_string(), caps[2].to_string()),
        None => (trimmed.to_string(), String::new()),
    }
}

/// Permissive salary parse: keep the digits, drop everything else.
/// Anything that still fails to parse (including the empty string) is 0.
pub fn parse_salary(raw: &str) -> i64 {
    non_digit_re()
        .replace_all(raw, "")
        .parse::<i64>()
        .unwrap_or(0)
}
