//! Structure-keyed memoization of disambiguated parses. Grounded in
//! `AddressParser._parse_token_types`'s cache, which keys on `hash(tuple(token_types))` — the
//! sequence of token *kinds*, never the literal lexemes — so that "Mitre 1200" and "Salta 350"
//! (both `WORD NUM`) share one chart-parser run.

use crate::token::TokenKind;
use crate::tree::ParseTree;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A single-threaded cache from token-kind sequence to its disambiguated parse, or `None` if
/// that shape is known to be unparseable or irreducibly ambiguous. Uses `RefCell` rather than a
/// lock: per the facade's concurrency model, one `StructureCache` belongs to one thread at a
/// time (wrap a `Parser` externally — e.g. behind a `Mutex`, or one per worker — for concurrent
/// use).
#[derive(Debug, Default)]
pub struct StructureCache {
    entries: RefCell<HashMap<Vec<TokenKind>, Option<Rc<ParseTree>>>>,
}

impl StructureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kinds: &[TokenKind]) -> Option<Option<Rc<ParseTree>>> {
        self.entries.borrow().get(kinds).cloned()
    }

    pub fn insert(&self, kinds: Vec<TokenKind>, tree: Option<Rc<ParseTree>>) {
        self.entries.borrow_mut().insert(kinds, tree);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
mod __tests__ {
    use super::*;

    #[test]
    fn miss_then_hit() {
        let cache = StructureCache::new();
        let kinds = vec![TokenKind::WORD, TokenKind::NUM];
        assert_eq!(cache.get(&kinds), None);
        cache.insert(kinds.clone(), None);
        assert_eq!(cache.get(&kinds), Some(None));
        assert_eq!(cache.len(), 1);
    }
}
