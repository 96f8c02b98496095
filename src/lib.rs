//! Extracts structured components — street name(s), door number, floor, and address shape —
//! from free-text Argentine street addresses.
//!
//! ```
//! use ar_address_parser::Parser;
//!
//! let parser = Parser::new().expect("the embedded grammar is valid");
//! let data = parser.parse("Tucuman 1300").expect("this address parses");
//!
//! assert_eq!(data.street_names, vec!["Tucuman".to_string()]);
//! assert_eq!(data.door_number_value.as_deref(), Some("1300"));
//! ```
//!
//! The pipeline is: [normalize] a raw string, [tokenizer::tokenize] it into a fixed terminal
//! alphabet ([TokenKind]), parse the resulting kind sequence with an Earley [chart
//! parser](earley) against a textual [grammar], pick the best derivation among any ambiguity
//! with [rank]/[disambiguate], and read the selected [tree::ParseTree] into an [AddressData].
//! A [cache::StructureCache] can memoize the chart-parser step across addresses that share a
//! lexical shape.
//!
//! Parsing never fails loudly: [Parser::parse] returns `None` for input that's empty, doesn't
//! fit the grammar, or can't be disambiguated, and never panics or returns an `Err`. The only
//! fallible construction step is loading a grammar ([GrammarError]).

pub mod address;
pub mod cache;
pub mod disambiguate;
pub mod earley;
pub mod error;
pub mod grammar;
pub mod normalize;
pub mod parser;
pub mod rank;
pub mod token;
pub mod tokenizer;
pub mod tree;

pub use address::{AddressData, AddressType, DoorNumberValue};
pub use cache::StructureCache;
pub use error::{AddressDataError, GrammarError};
pub use normalize::normalize;
pub use parser::Parser;
pub use token::{Token, TokenKind};
pub use tree::ParseTree;
