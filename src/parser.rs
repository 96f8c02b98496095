//! The address-parsing facade, tying normalizer, tokenizer, chart parser, ranker,
//! disambiguator and result model together. Grounded in `AddressParser.parse` /
//! `TreeVisitor.extract_data` from the original implementation.

use crate::address::AddressData;
use crate::cache::StructureCache;
use crate::disambiguate::disambiguate;
use crate::earley;
use crate::error::GrammarError;
use crate::grammar::{self, Grammar};
use crate::normalize::normalize;
use crate::token::{Token, TokenKind};
use crate::tokenizer;
use crate::tree::ParseTree;
use std::rc::Rc;
use tracing::{debug, trace};

/// Extracts structured components from free-text Argentine street addresses.
///
/// `parse` never panics and never returns an `Err`: `None` means the address was empty after
/// normalization, didn't fit the grammar, or was irreducibly ambiguous.
///
/// Not `Sync` when constructed with a structure cache — the cache uses interior mutability that
/// assumes single-threaded access. Share a cached `Parser` across threads behind a
/// `Mutex<Parser>`, or give each worker thread its own `Parser`.
pub struct Parser {
    grammar: Grammar,
    cache: Option<Rc<StructureCache>>,
}

impl Parser {
    /// A parser using the grammar embedded in this crate, with no structure cache.
    pub fn new() -> Result<Self, GrammarError> {
        Ok(Self {
            grammar: grammar::default()?,
            cache: None,
        })
    }

    /// Like [Parser::new], but memoizing disambiguated parses in `cache`, keyed by token-kind
    /// sequence. Keep a clone of `cache` to inspect hit counts from outside, the way the
    /// original's test suite asserts on its cache dict after parsing.
    pub fn new_with_cache(cache: Rc<StructureCache>) -> Result<Self, GrammarError> {
        Ok(Self {
            grammar: grammar::default()?,
            cache: Some(cache),
        })
    }

    /// A parser loaded from caller-supplied grammar text, with no structure cache.
    pub fn from_grammar_str(text: &str) -> Result<Self, GrammarError> {
        Ok(Self {
            grammar: grammar::load_str(text)?,
            cache: None,
        })
    }

    pub fn parse(&self, address: &str) -> Option<AddressData> {
        let trimmed = address.trim();
        let normalized = normalize(trimmed);
        if normalized.is_empty() {
            debug!(address = trimmed, "empty after normalization");
            return None;
        }

        let tokens = tokenizer::tokenize(&normalized);
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

        let tree = self.parse_kinds(&kinds)?;
        let root = tree
            .first_child()
            .expect("address always wraps exactly one of simple/intersection/between");

        let (street_names, door_number_value, door_number_unit, floor) = extract_data(root, &tokens);

        AddressData::new(
            trimmed,
            street_names,
            door_number_value,
            door_number_unit,
            floor,
            root.label(),
        )
        .ok()
    }

    fn parse_kinds(&self, kinds: &[TokenKind]) -> Option<Rc<ParseTree>> {
        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(kinds) {
                trace!(tokens = kinds.len(), "structure cache hit");
                return cached;
            }

            let computed = self.disambiguated_tree(kinds);
            cache.insert(kinds.to_vec(), computed.clone());
            return computed;
        }

        self.disambiguated_tree(kinds)
    }

    fn disambiguated_tree(&self, kinds: &[TokenKind]) -> Option<Rc<ParseTree>> {
        let trees = earley::parse(&self.grammar, kinds);
        trace!(derivations = trees.len(), "chart parse complete");
        disambiguate(&trees)
    }
}

fn extract_data(
    root: &ParseTree,
    tokens: &[Token],
) -> (Vec<String>, Option<String>, Option<String>, Option<String>) {
    let mut street_names = Vec::new();
    let mut door_number_value = None;
    let mut door_number_unit = None;
    let mut floor = None;

    let is_extractable =
        |label: &str| matches!(label, "street" | "door_number_value" | "door_number_unit" | "floor");

    for subtree in root.subtrees_with(&is_extractable) {
        let text = subtree.text(tokens);
        match subtree.label() {
            "street" => street_names.push(text),
            "door_number_value" => door_number_value = Some(text),
            "door_number_unit" => door_number_unit = Some(text),
            "floor" => floor = Some(text),
            _ => unreachable!("is_extractable only admits these four labels"),
        }
    }

    (street_names, door_number_value, door_number_unit, floor)
}
