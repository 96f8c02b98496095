//! Error types for the one fatal failure class (malformed grammar text) and for directly
//! constructing an out-of-enum [AddressData](crate::address::AddressData). Everything else
//! (a string that doesn't parse as an address) is represented as `Option::None`, never as an
//! error or a panic, per the facade's contract.

use thiserror::Error;

/// Raised only while loading a grammar, from [crate::grammar::load] /
/// [crate::grammar::load_str] / [crate::Parser::from_grammar_str].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrammarError {
    #[error("grammar is malformed: {reason} (symbol: {symbol})")]
    InvalidGrammar { symbol: String, reason: String },
}

/// Raised only by [crate::address::AddressData::new] when given a type outside the three
/// enumerated address shapes. The parser facade never triggers this.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid address type: {0}")]
pub struct AddressDataError(pub String);
