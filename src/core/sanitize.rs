// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Column name → tile label: underscores to spaces, whitespace collapsed,
/// every word capitalized ("poison contorl" → "Poison Contorl",
/// "Net_Contents" → "Net Contents").
pub fn titleize(s: &str) -> String {
    let spaced = normalize_ws(&s.replace('_', " "));
    spaced
        .split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    // Leading punctuation is kept; the first ASCII word char is upper-cased
    // and the remainder of the word lower-cased.
    match word.char_indices().find(|(_, c)| c.is_ascii_alphanumeric()) {
        Some((i, c)) => {
            let rest = &word[i + c.len_utf8()..];
            join!(&word[..i], &c.to_ascii_uppercase().to_string(), &rest.to_lowercase())
        }
        None => s!(word),
    }
}

/// Stable, URL-fragment-safe card id for an identifier: lowercase,
/// whitespace removed, anything outside [a-z0-9_-] dropped.
pub fn safe_id(id: &str) -> String {
    id.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect()
}

/// Card anchor (`lot-<safe id>`), or None when nothing survives sanitizing.
pub fn anchor_id(id: &str) -> Option<String> {
    let safe = safe_id(id);
    if safe.is_empty() { None } else { Some(join!("lot-", &safe)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titleize_variants() {
        assert_eq!(titleize("poison contorl"), "Poison Contorl");
        assert_eq!(titleize("Net_Contents"), "Net Contents");
        assert_eq!(titleize("  warning   1 "), "Warning 1");
        assert_eq!(titleize("TotalTHC"), "Totalthc");
        assert_eq!(titleize("(extra) notes"), "(Extra) Notes");
    }

    #[test]
    fn anchors_are_fragment_safe() {
        assert_eq!(anchor_id("BT 000118").as_deref(), Some("lot-bt000118"));
        assert_eq!(anchor_id("TR-ABCD-0004").as_deref(), Some("lot-tr-abcd-0004"));
        assert_eq!(anchor_id("  #!  "), None);
    }
}
