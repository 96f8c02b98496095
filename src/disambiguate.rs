//! Selects the single best parse among an ambiguous forest, or reports that the forest can't be
//! resolved. Mirrors `AddressParser._disambiguate_trees`.

use crate::rank::rank;
use crate::tree::ParseTree;
use std::rc::Rc;

/// Returns the unique highest-ranked tree in `trees` (still rooted at `address`), or `None`
/// when `trees` is empty or the top two candidates tie on rank — a tie means the grammar alone
/// cannot tell which derivation is the intended one.
pub fn disambiguate(trees: &[Rc<ParseTree>]) -> Option<Rc<ParseTree>> {
    let mut ranked: Vec<_> = trees
        .iter()
        .map(|tree| {
            let root = tree
                .first_child()
                .expect("address always wraps exactly one of simple/intersection/between");
            (tree.clone(), rank(root))
        })
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    match ranked.as_slice() {
        [] => None,
        [only] => Some(only.0.clone()),
        [best, second, ..] if best.1 == second.1 => None,
        [best, ..] => Some(best.0.clone()),
    }
}
