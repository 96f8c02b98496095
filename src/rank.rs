//! Computes the rank tuple used to pick among ambiguous parses, exactly mirroring
//! `TreeVisitor._get_rank` in the original implementation.

use crate::tree::ParseTree;

/// `(unnamed_streets_count, has_door_number, type_rank)`, compared lexicographically — a
/// strictly larger tuple always wins. `type_rank` is the position of the winning tree's shape
/// within a fixed preference list that depends on whether a door number was found: `simple`
/// beats `intersection` when there is a door number, `intersection` beats `simple` when there
/// isn't, and `between` is always the most preferred of the three either way. In practice this
/// tiebreaker rarely decides anything, since two different address shapes over the same token
/// sequence are uncommon to begin with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank(pub u32, pub u8, pub u8);

const RANKS_WITH_DOOR_NUMBER: [&str; 3] = ["intersection", "simple", "between"];
const RANKS_WITHOUT_DOOR_NUMBER: [&str; 3] = ["simple", "intersection", "between"];

/// `root` is the `simple` / `intersection` / `between` node directly — the single child the
/// `address` wrapper produces, not the wrapper itself.
pub fn rank(root: &ParseTree) -> Rank {
    let mut has_door_number = false;
    let mut unnamed_streets: u32 = 0;

    let is_street_clause = |label: &str| label == "street_no_num" || label == "street_with_num";
    for subtree in root.subtrees_with(&is_street_clause) {
        if subtree.label() == "street_with_num" {
            has_door_number = true;
        }

        let wraps_unnamed_street = subtree
            .first_child()
            .and_then(|street_ref| street_ref.first_child())
            .map(|inner| inner.label() == "unnamed_street")
            .unwrap_or(false);
        if wraps_unnamed_street {
            unnamed_streets += 1;
        }
    }

    let ranks = if has_door_number {
        RANKS_WITH_DOOR_NUMBER
    } else {
        RANKS_WITHOUT_DOOR_NUMBER
    };
    let type_rank = ranks
        .iter()
        .position(|label| *label == root.label())
        .expect("root is always one of the three known address shapes") as u8;

    Rank(unnamed_streets, has_door_number as u8, type_rank)
}
