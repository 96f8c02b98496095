//! The fixed terminal alphabet recognised by the [tokenizer](crate::tokenizer), and the
//! lexical unit ([Token]) produced from it.

use std::fmt::{self, Display, Formatter};

/// The closed set of terminal symbols for the address grammar.
///
/// Declaration order is authoritative: the [tokenizer](crate::tokenizer) tries patterns in
/// this order and the first alternative that matches at a position wins (longest-match-by-
/// priority, not longest-match-by-length).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    AND_WORD,
    AND_NUM,
    OF,
    FLOOR,
    DOOR_TYPE,
    GROUNDL,
    ISCT_SEP,
    BTWN_SEP,
    BETWEEN,
    KM,
    MISSING_NAME,
    MISSING_NUM,
    S_N,
    STREET_TYPE_S,
    STREET_TYPE_L,
    ROUTE,
    NUM_LABEL_S,
    NUM_LABEL_L,
    DECIMAL,
    NUM_RANGE,
    ORDINAL,
    NUM,
    N,
    LETTER,
    NUMS_LETTER,
    WORD,
    WS,
}

impl TokenKind {
    /// All variants, in the declared (priority) order. Kept in sync with the enum by the unit
    /// test in [crate::tokenizer].
    pub const ALL: &'static [TokenKind] = &[
        TokenKind::AND_WORD,
        TokenKind::AND_NUM,
        TokenKind::OF,
        TokenKind::FLOOR,
        TokenKind::DOOR_TYPE,
        TokenKind::GROUNDL,
        TokenKind::ISCT_SEP,
        TokenKind::BTWN_SEP,
        TokenKind::BETWEEN,
        TokenKind::KM,
        TokenKind::MISSING_NAME,
        TokenKind::MISSING_NUM,
        TokenKind::S_N,
        TokenKind::STREET_TYPE_S,
        TokenKind::STREET_TYPE_L,
        TokenKind::ROUTE,
        TokenKind::NUM_LABEL_S,
        TokenKind::NUM_LABEL_L,
        TokenKind::DECIMAL,
        TokenKind::NUM_RANGE,
        TokenKind::ORDINAL,
        TokenKind::NUM,
        TokenKind::N,
        TokenKind::LETTER,
        TokenKind::NUMS_LETTER,
        TokenKind::WORD,
        TokenKind::WS,
    ];

    /// The name as it appears quoted in a grammar file's right-hand sides, e.g. `'WORD'`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::AND_WORD => "AND_WORD",
            TokenKind::AND_NUM => "AND_NUM",
            TokenKind::OF => "OF",
            TokenKind::FLOOR => "FLOOR",
            TokenKind::DOOR_TYPE => "DOOR_TYPE",
            TokenKind::GROUNDL => "GROUNDL",
            TokenKind::ISCT_SEP => "ISCT_SEP",
            TokenKind::BTWN_SEP => "BTWN_SEP",
            TokenKind::BETWEEN => "BETWEEN",
            TokenKind::KM => "KM",
            TokenKind::MISSING_NAME => "MISSING_NAME",
            TokenKind::MISSING_NUM => "MISSING_NUM",
            TokenKind::S_N => "S_N",
            TokenKind::STREET_TYPE_S => "STREET_TYPE_S",
            TokenKind::STREET_TYPE_L => "STREET_TYPE_L",
            TokenKind::ROUTE => "ROUTE",
            TokenKind::NUM_LABEL_S => "NUM_LABEL_S",
            TokenKind::NUM_LABEL_L => "NUM_LABEL_L",
            TokenKind::DECIMAL => "DECIMAL",
            TokenKind::NUM_RANGE => "NUM_RANGE",
            TokenKind::ORDINAL => "ORDINAL",
            TokenKind::NUM => "NUM",
            TokenKind::N => "N",
            TokenKind::LETTER => "LETTER",
            TokenKind::NUMS_LETTER => "NUMS_LETTER",
            TokenKind::WORD => "WORD",
            TokenKind::WS => "WS",
        }
    }

    /// Parse a bare kind name (as found unquoted inside a grammar file) back into a [TokenKind].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexical unit produced by the tokenizer: the recognised substring together with
/// the [TokenKind] it was classified as. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            lexeme: lexeme.into(),
            kind,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.lexeme)
    }
}
