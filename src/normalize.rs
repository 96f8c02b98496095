//! Deterministic regex-based cleanup of a raw address string before tokenization.
//!
//! See spec §4.1. All patterns are case-insensitive and applied as a single combined
//! alternation pass so that matches are non-overlapping and left-to-right, the same way the
//! teacher's [pattern lexemes](crate::tokenizer) combine alternatives into one compiled regex.
//! A couple of the source patterns (the locality-indicator cutoff, the "al" filler word) only
//! make sense with a lookahead, which `regex` cannot express; this module uses `fancy_regex`
//! for all of its patterns instead, the way `shimmytok`'s pre-tokenizer does.

use fancy_regex::Regex;
use once_cell::sync::Lazy;

static NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?xi)
        \( (?: ex | antes | frente | mano | (?:al\s)?lado ) [^)]*? \)  # parenthetical qualifier
        | \( [sneo] \)                                                 # cardinal-orientation marker
        | , (?: \s | $ ) | \s ,                                        # comma-as-separator
        | [()\x22|]                                                    # stray punctuation
        | -+ $                                                         # trailing dashes
        | \s - \s                                                      # dashes between spaces
        | (?: b[°ºª] | barrio\s | bo\.\s ) .*                           # locality indicator
        | al\s+ (?=\d)                                                 # filler 'al' before a number
        ",
    )
    .expect("noise pattern is a valid regex")
});

static GLUED_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([^\W\d]{2,}\.?)(\d)").expect("glued-digit pattern is valid"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Replace every non-overlapping match of `re` in `text` with `replacement`, skipping matches
/// that overflow `fancy_regex`'s backtracking budget instead of propagating an error — noise
/// this permissive is never load-bearing enough to justify failing the whole parse.
fn replace_all(re: &Regex, text: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_end = 0;
    for m in re.find_iter(text).filter_map(Result::ok) {
        out.push_str(&text[last_end..m.start()]);
        out.push_str(replacement);
        last_end = m.end();
    }
    out.push_str(&text[last_end..]);
    out
}

/// Same as [replace_all], but `replacement` may reference capture groups as `$1`, `$2`, ...
/// (only single-digit group references are needed by this module's patterns).
fn replace_all_captures(re: &Regex, text: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_end = 0;
    for caps in re.captures_iter(text).filter_map(Result::ok) {
        let m = caps.get(0).expect("whole-match group always present");
        out.push_str(&text[last_end..m.start()]);
        let mut chars = replacement.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '$' {
                if let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                    chars.next();
                    if let Some(group) = caps.get(d as usize) {
                        out.push_str(group.as_str());
                    }
                    continue;
                }
            }
            out.push(c);
        }
        last_end = m.end();
    }
    out.push_str(&text[last_end..]);
    out
}

/// Apply the documented normalization passes to `raw` and return the cleaned string.
///
/// An empty or all-whitespace input normalizes to the empty string.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let without_noise = replace_all(&NOISE, trimmed, " ");
    let spaced = replace_all_captures(&GLUED_DIGITS, &without_noise, "$1 $2");
    replace_all(&WHITESPACE_RUN, spaced.trim(), " ")
}

#[cfg(test)]
mod __tests__ {
    use super::*;

    #[test]
    fn empty_and_blank_normalize_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(normalize("  Tucumán   1300  "), "Tucumán 1300");
    }

    #[test]
    fn splits_letters_glued_to_digits() {
        assert_eq!(normalize("hola123"), "hola 123");
    }

    #[test]
    fn keeps_single_letter_runs_glued() {
        assert_eq!(normalize("1ro de Mayo"), "1ro de Mayo");
    }

    #[test]
    fn strips_parenthetical_qualifier() {
        assert_eq!(normalize("Mitre (ex San Martin) 1200"), "Mitre 1200");
    }

    #[test]
    fn strips_barrio_suffix_to_end_of_string() {
        assert_eq!(normalize("Tucumán 1300 B° Centro"), "Tucumán 1300");
    }

    #[test]
    fn strips_trailing_dashes_and_surrounded_dashes() {
        assert_eq!(normalize("Corrientes - Salta"), "Corrientes Salta");
        assert_eq!(normalize("Corrientes 1200---"), "Corrientes 1200");
    }

    #[test]
    fn strips_filler_al_before_digit() {
        assert_eq!(normalize("Corrientes al 1200"), "Corrientes 1200");
    }
}
