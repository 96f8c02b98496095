//! Splits a normalized address string into a sequence of [Token]s.
//!
//! Ground truth for the pattern list is the original tokenizer's `_TOKEN_TYPES` table: one
//! named group per [TokenKind], joined into a single alternation and matched left to right, so
//! that at any given position the first alternative that matches wins — declaration order *is*
//! match priority, the same property the teacher's [Pattern](crate) lexemes rely on. A few of
//! these patterns (`AND_WORD`, `AND_NUM`, `NUM_LABEL_S`) only make sense with a lookahead
//! (`y\s(?=\d)` to tell "y 1200" from "y Salta" without consuming the next token), which rules
//! out the plain `regex` crate; this module uses `fancy_regex` instead, the same crate
//! `shimmytok`'s pre-tokenizer reaches for and for the same reason.

use crate::token::{Token, TokenKind};
use fancy_regex::Regex;
use once_cell::sync::Lazy;
use tracing::trace;

fn pattern_for(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::AND_WORD => r"y\s(?=\D)|e\s(?=i)",
        TokenKind::AND_NUM => r"y\s(?=\d)",
        TokenKind::OF => r"de\s",
        TokenKind::FLOOR => r"piso(\s|$)",
        TokenKind::DOOR_TYPE => r"(d(e?p)?to\.?|departamento|oficina|of\.)\s",
        TokenKind::GROUNDL => r"(p\.?b\.?|planta\sbaja)(\s|$)",
        TokenKind::ISCT_SEP => r"esquina|esq\.|esq\s|esq/",
        TokenKind::BTWN_SEP => r"e/(calles)?|entre\scalles",
        TokenKind::BETWEEN => r"entre\s",
        TokenKind::KM => r"kil[oó]metro|km\.?",
        TokenKind::MISSING_NAME => r"s/nombre",
        TokenKind::MISSING_NUM => r"(sin\s|s/)(n[uú]mero|n(ro\.?|[°º]))",
        // Stricter than the original `s[/-]n|sn(\s|$)`: both alternatives now require a
        // trailing boundary, so a bare `s/n` glued to more text can't swallow it.
        TokenKind::S_N => r"s[/-]n(\s|$)|sn(\s|$)",
        TokenKind::STREET_TYPE_S => r"(avda|av|bv|diag)[\s.]",
        TokenKind::STREET_TYPE_L => r"calle\s|avenida|bo?ulevard?|diagonal",
        TokenKind::ROUTE => r"ruta|(rta|rn|rp)[\s.]",
        TokenKind::NUM_LABEL_S => r"n\s?[°ºª*]|#|n(?=\d)",
        TokenKind::NUM_LABEL_L => r"nro[\s.]|n[uú]mero",
        TokenKind::DECIMAL => r"\d+[.,]\d+",
        TokenKind::NUM_RANGE => r"\d+[/-]\d+([/-]\d+)*",
        TokenKind::ORDINAL => r"\d+(era?|nd[oa]|[nmtvr][oa])(\s|$|\.)",
        TokenKind::NUM => r"\d+((\s|$)|[°º])",
        TokenKind::N => r"n\s",
        TokenKind::LETTER => r"[^\d\W](\s|$|\.)",
        // Lot/unit codes glued to a number on one side, e.g. the "M2" in "Lote 14 M2": the
        // separation pass only splits a letter run immediately followed by a digit, never the
        // reverse, so these stay as one lexeme rather than falling through to plain WORD.
        TokenKind::NUMS_LETTER => r"[^\W\d]+\d+|\d+[^\W\d]+",
        // Deliberately wider than the original `(\w|\.|'|`|´|:|/)+`: matching any run of
        // non-whitespace makes this alternative a total catch-all, so tokenizing can never fail.
        TokenKind::WORD => r"\S+",
        TokenKind::WS => r"\s+",
    }
}

static COMBINED: Lazy<Regex> = Lazy::new(|| {
    let alternation = TokenKind::ALL
        .iter()
        .map(|kind| format!("(?P<{}>{})", kind.name(), pattern_for(*kind)))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){}", alternation)).expect("combined token pattern is a valid regex")
});

/// Splits `text` (assumed already normalized) into a [Token] sequence, dropping whitespace.
///
/// `WORD` matches any run of non-whitespace bytes, so every position in `text` is covered by
/// some alternative and this function never fails to account for the whole input.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for caps in COMBINED.captures_iter(text).filter_map(Result::ok) {
        let whole = caps.get(0).expect("whole-match group always present");
        let kind = TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| caps.name(kind.name()).is_some())
            .expect("some named group always matches alongside group 0");

        if kind == TokenKind::WS {
            continue;
        }

        let lexeme = whole.as_str().trim().to_string();
        trace!(kind = %kind, lexeme = %lexeme, "tokenized");
        tokens.push(Token::new(lexeme, kind));
    }

    tokens
}
