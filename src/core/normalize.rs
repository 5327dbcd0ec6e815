// src/core/normalize.rs
//
// Canonical form for search comparisons: typographic quotes, dashes and
// non-breaking spaces folded to ASCII, then lowercased and trimmed.

/// Fold one typographic character to its ASCII stand-in.
#[inline]
fn fold_char(ch: char) -> char {
    match ch {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' => '\'',
        '\u{201C}' | '\u{201D}' | '\u{201F}' | '\u{2033}' => '"',
        '\u{2010}'..='\u{2015}' | '\u{2212}' => '-',
        '\u{00A0}' => ' ',
        c => c,
    }
}

/// Normalize a string for comparison. Idempotent.
pub fn normalize(s: &str) -> String {
    let folded: String = s.chars().map(fold_char).collect();
    folded.to_lowercase().trim().to_string()
}

/// Drop whitespace and ASCII hyphens (identifier matching).
pub fn strip_separators(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace() && *c != '-').collect()
}

/// `normalize` followed by `strip_separators`.
pub fn normalize_id(s: &str) -> String {
    strip_separators(&normalize(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_quotes_dashes_and_nbsp() {
        assert_eq!(normalize("\u{201C}Sunset\u{201D}"), "\"sunset\"");
        assert_eq!(normalize("Grandma\u{2019}s"), "grandma's");
        assert_eq!(normalize("TR\u{2013}ABCD\u{2014}0004"), "tr-abcd-0004");
        assert_eq!(normalize("5\u{2212}3"), "5-3");
        assert_eq!(normalize("\u{00A0} Pine\u{00A0}Dew \u{00A0}"), "pine dew");
    }

    #[test]
    fn idempotent_on_mixed_input() {
        for s in ["", "  ABC  ", "\u{2011}x\u{2011}", "İstanbul", "\u{00A0}\u{201E}Q\u{201F}", "Ünïcödé – ok"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn id_strips_spaces_and_hyphens() {
        assert_eq!(normalize_id("TR-ABCD 0004"), "trabcd0004");
        assert_eq!(normalize_id("TR\u{2013}ABCD\u{2013}0004"), "trabcd0004");
    }
}
