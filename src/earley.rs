//! Earley chart parser: builds the recognition chart (predictor/scanner/completer), then walks
//! it to enumerate every distinct parse as a [ParseTree]. No pruning — every ambiguous
//! derivation the grammar admits over `kinds` is returned, leaving disambiguation entirely to
//! [crate::rank]/[crate::disambiguate].

use crate::grammar::{Grammar, Symbol, START_SYMBOL};
use crate::token::TokenKind;
use crate::tree::ParseTree;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Item {
    rule: usize,
    dot: usize,
    start: usize,
}

struct Rule<'g> {
    lhs: &'g str,
    rhs: &'g [Symbol],
}

/// Parse `kinds` against `grammar`, returning one tree per distinct derivation.
///
/// An empty result means `kinds` is not a member of the language the grammar describes (not an
/// error — the facade treats this the same as an ambiguous result, as "no usable address").
pub fn parse(grammar: &Grammar, kinds: &[TokenKind]) -> Vec<Rc<ParseTree>> {
    let rules: Vec<Rule> = grammar
        .productions()
        .iter()
        .map(|p| Rule {
            lhs: &p.lhs,
            rhs: &p.rhs,
        })
        .collect();
    let n = kinds.len();

    let chart = build_chart(&rules, kinds, n);

    let mut completed: HashMap<(String, usize, usize), Vec<usize>> = HashMap::new();
    for (end, items) in chart.iter().enumerate() {
        for item in items {
            let rule = &rules[item.rule];
            if item.dot == rule.rhs.len() {
                completed
                    .entry((rule.lhs.to_string(), item.start, end))
                    .or_default()
                    .push(item.rule);
            }
        }
    }

    if !completed.contains_key(&(START_SYMBOL.to_string(), 0, n)) {
        debug!(tokens = n, "no completed derivation of the start symbol");
        return Vec::new();
    }

    let mut memo: HashMap<(String, usize, usize), Vec<ParseTree>> = HashMap::new();
    derive(START_SYMBOL, 0, n, &rules, &completed, kinds, &mut memo)
        .into_iter()
        .map(Rc::new)
        .collect()
}

fn build_chart(rules: &[Rule], kinds: &[TokenKind], n: usize) -> Vec<Vec<Item>> {
    let mut chart: Vec<Vec<Item>> = vec![Vec::new(); n + 1];
    let mut seen: Vec<HashSet<(usize, usize, usize)>> = vec![HashSet::new(); n + 1];

    let mut add = |chart: &mut Vec<Vec<Item>>,
                   seen: &mut Vec<HashSet<(usize, usize, usize)>>,
                   pos: usize,
                   item: Item| {
        if seen[pos].insert((item.rule, item.dot, item.start)) {
            chart[pos].push(item);
        }
    };

    for (rid, rule) in rules.iter().enumerate() {
        if rule.lhs == START_SYMBOL {
            add(&mut chart, &mut seen, 0, Item { rule: rid, dot: 0, start: 0 });
        }
    }

    for i in 0..=n {
        let mut idx = 0;
        while idx < chart[i].len() {
            let item = chart[i][idx];
            idx += 1;
            let rule = &rules[item.rule];

            if item.dot < rule.rhs.len() {
                match &rule.rhs[item.dot] {
                    Symbol::NonTerminal(name) => {
                        for (rid, candidate) in rules.iter().enumerate() {
                            if candidate.lhs == name {
                                add(
                                    &mut chart,
                                    &mut seen,
                                    i,
                                    Item { rule: rid, dot: 0, start: i },
                                );
                            }
                        }
                    }
                    Symbol::Terminal(kind) => {
                        if i < n && kinds[i] == *kind {
                            add(
                                &mut chart,
                                &mut seen,
                                i + 1,
                                Item {
                                    rule: item.rule,
                                    dot: item.dot + 1,
                                    start: item.start,
                                },
                            );
                        }
                    }
                }
            } else {
                // Completer: item.start < i always holds here, since a completed item requires
                // at least one scanner step and the grammar has no empty productions, so
                // chart[item.start] is already settled and safe to snapshot.
                let snapshot = chart[item.start].clone();
                for candidate in snapshot {
                    let crule = &rules[candidate.rule];
                    if candidate.dot < crule.rhs.len() {
                        if let Symbol::NonTerminal(name) = &crule.rhs[candidate.dot] {
                            if name == rule.lhs {
                                add(
                                    &mut chart,
                                    &mut seen,
                                    i,
                                    Item {
                                        rule: candidate.rule,
                                        dot: candidate.dot + 1,
                                        start: candidate.start,
                                    },
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    chart
}

fn derive(
    name: &str,
    start: usize,
    end: usize,
    rules: &[Rule],
    completed: &HashMap<(String, usize, usize), Vec<usize>>,
    kinds: &[TokenKind],
    memo: &mut HashMap<(String, usize, usize), Vec<ParseTree>>,
) -> Vec<ParseTree> {
    let key = (name.to_string(), start, end);
    if let Some(cached) = memo.get(&key) {
        return cached.clone();
    }

    let mut out = Vec::new();
    if let Some(rule_ids) = completed.get(&key).cloned() {
        for rid in rule_ids {
            let rule = &rules[rid];
            for children in enumerate_rhs(rule.rhs, 0, start, end, rules, completed, kinds, memo) {
                out.push(ParseTree::node(name.to_string(), children));
            }
        }
    }

    memo.insert(key, out.clone());
    out
}

#[allow(clippy::too_many_arguments)]
fn enumerate_rhs(
    rhs: &[Symbol],
    idx: usize,
    pos: usize,
    end: usize,
    rules: &[Rule],
    completed: &HashMap<(String, usize, usize), Vec<usize>>,
    kinds: &[TokenKind],
    memo: &mut HashMap<(String, usize, usize), Vec<ParseTree>>,
) -> Vec<Vec<ParseTree>> {
    if idx == rhs.len() {
        return if pos == end { vec![Vec::new()] } else { Vec::new() };
    }

    match &rhs[idx] {
        Symbol::Terminal(kind) => {
            if pos < end && kinds[pos] == *kind {
                let leaf = ParseTree::leaf(*kind, pos);
                enumerate_rhs(rhs, idx + 1, pos + 1, end, rules, completed, kinds, memo)
                    .into_iter()
                    .map(|mut rest| {
                        rest.insert(0, leaf.clone());
                        rest
                    })
                    .collect()
            } else {
                Vec::new()
            }
        }
        Symbol::NonTerminal(name) => {
            let mut out = Vec::new();
            for mid in pos..=end {
                let subtrees = derive(name, pos, mid, rules, completed, kinds, memo);
                if subtrees.is_empty() {
                    continue;
                }
                let rests = enumerate_rhs(rhs, idx + 1, mid, end, rules, completed, kinds, memo);
                for subtree in &subtrees {
                    for rest in &rests {
                        let mut combo = vec![subtree.clone()];
                        combo.extend(rest.clone());
                        out.push(combo);
                    }
                }
            }
            out
        }
    }
}

#[cfg(test)]
mod __tests__ {
    use super::*;
    use crate::grammar;
    use crate::tokenizer;

    fn kinds_for(text: &str) -> Vec<TokenKind> {
        tokenizer::tokenize(text).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn parses_a_simple_street_with_door_number() {
        let grammar = grammar::default().unwrap();
        let kinds = kinds_for("Tucuman 1300");
        let trees = parse(&grammar, &kinds);
        assert_eq!(trees.len(), 1);
        assert_eq!(trees[0].label(), "address");
    }

    #[test]
    fn rejects_an_unparseable_sequence() {
        let grammar = grammar::default().unwrap();
        // A bare separator token alone derives nothing.
        let kinds = vec![TokenKind::BETWEEN];
        assert!(parse(&grammar, &kinds).is_empty());
    }

    #[test]
    fn parses_an_intersection() {
        let grammar = grammar::default().unwrap();
        let kinds = kinds_for("Corrientes y Salta");
        let trees = parse(&grammar, &kinds);
        assert!(!trees.is_empty());
        assert!(trees.iter().any(|t| t.children()[0].label() == "intersection"));
    }
}
