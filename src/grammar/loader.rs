//! Parses the textual grammar file format and validates the result.
//!
//! Format: one or more `lhs -> alt1 | alt2 | ...` lines. A line whose first non-whitespace
//! character is `|` continues the alternatives of the nearest preceding `lhs`, so a single
//! nonterminal's alternatives can be spread across several lines. Inside an alternative,
//! symbols are whitespace-separated; `'NAME'` (single-quoted) is a terminal naming a
//! [TokenKind](crate::token::TokenKind), anything else is a nonterminal name.

use super::{Grammar, Production, Symbol, START_SYMBOL};
use crate::error::GrammarError;
use crate::token::TokenKind;
use std::collections::HashSet;
use std::path::Path;

/// Load and validate a grammar from a file on disk.
pub fn load(path: &Path) -> Result<Grammar, GrammarError> {
    let text = std::fs::read_to_string(path).map_err(|e| GrammarError::InvalidGrammar {
        symbol: path.display().to_string(),
        reason: e.to_string(),
    })?;
    load_str(&text)
}

/// Load and validate a grammar from its textual representation.
pub fn load_str(text: &str) -> Result<Grammar, GrammarError> {
    let productions = parse_productions(text)?;
    validate(&productions)?;
    Ok(Grammar { productions })
}

fn parse_productions(text: &str) -> Result<Vec<Production>, GrammarError> {
    let mut productions = Vec::new();
    let mut current_lhs: Option<String> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('|') {
            let lhs = current_lhs.clone().ok_or_else(|| GrammarError::InvalidGrammar {
                symbol: line.to_string(),
                reason: "'|' continuation with no preceding rule".to_string(),
            })?;
            parse_alternatives(&lhs, rest, &mut productions)?;
        } else if let Some((lhs_part, rhs_part)) = line.split_once("->") {
            let lhs = lhs_part.trim().to_string();
            if lhs.is_empty() {
                return Err(GrammarError::InvalidGrammar {
                    symbol: line.to_string(),
                    reason: "missing left-hand side".to_string(),
                });
            }
            parse_alternatives(&lhs, rhs_part, &mut productions)?;
            current_lhs = Some(lhs);
        } else {
            return Err(GrammarError::InvalidGrammar {
                symbol: line.to_string(),
                reason: "expected 'lhs -> rhs' or a '|' continuation".to_string(),
            });
        }
    }

    Ok(productions)
}

fn parse_alternatives(
    lhs: &str,
    alternatives: &str,
    productions: &mut Vec<Production>,
) -> Result<(), GrammarError> {
    for alt in alternatives.split('|') {
        let mut rhs = Vec::new();
        for token in alt.split_whitespace() {
            rhs.push(parse_symbol(lhs, token)?);
        }
        if rhs.is_empty() {
            return Err(GrammarError::InvalidGrammar {
                symbol: lhs.to_string(),
                reason: "empty productions are not allowed".to_string(),
            });
        }
        productions.push(Production {
            lhs: lhs.to_string(),
            rhs,
        });
    }
    Ok(())
}

fn parse_symbol(lhs: &str, token: &str) -> Result<Symbol, GrammarError> {
    if let Some(name) = token.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')) {
        TokenKind::from_name(name)
            .map(Symbol::Terminal)
            .ok_or_else(|| GrammarError::InvalidGrammar {
                symbol: name.to_string(),
                reason: format!("invalid terminal referenced from '{lhs}'"),
            })
    } else {
        Ok(Symbol::NonTerminal(token.to_string()))
    }
}

fn validate(productions: &[Production]) -> Result<(), GrammarError> {
    let first_lhs = productions.first().map(|p| p.lhs.as_str());
    if first_lhs != Some(START_SYMBOL) {
        return Err(GrammarError::InvalidGrammar {
            symbol: first_lhs.unwrap_or("").to_string(),
            reason: format!("start rule must be '{START_SYMBOL}'"),
        });
    }

    let nonterminals: HashSet<&str> = productions.iter().map(|p| p.lhs.as_str()).collect();

    for production in productions {
        for symbol in &production.rhs {
            if let Symbol::NonTerminal(name) = symbol {
                if !nonterminals.contains(name.as_str()) {
                    return Err(GrammarError::InvalidGrammar {
                        symbol: name.clone(),
                        reason: format!("undefined nonterminal referenced from '{}'", production.lhs),
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod __tests__ {
    use super::*;

    #[test]
    fn loads_the_embedded_default_grammar() {
        let grammar = load_str(crate::grammar::DEFAULT_GRAMMAR_TEXT).expect("default grammar is valid");
        assert!(grammar.productions().iter().any(|p| p.lhs == "address"));
    }

    #[test]
    fn rejects_wrong_start_symbol() {
        let err = load_str("simple -> 'WORD'").unwrap_err();
        assert!(matches!(err, GrammarError::InvalidGrammar { .. }));
    }

    #[test]
    fn rejects_undefined_nonterminal() {
        let err = load_str("address -> missing").unwrap_err();
        assert!(matches!(err, GrammarError::InvalidGrammar { symbol, .. } if symbol == "missing"));
    }

    #[test]
    fn rejects_unknown_terminal() {
        let err = load_str("address -> 'NOT_A_TOKEN'").unwrap_err();
        assert!(matches!(err, GrammarError::InvalidGrammar { symbol, .. } if symbol == "NOT_A_TOKEN"));
    }

    #[test]
    fn continuation_lines_extend_the_preceding_rule() {
        let grammar = load_str(
            "address -> simple\nsimple -> 'WORD'\n        | 'WORD' 'WORD'\n",
        )
        .expect("grammar with continuation is valid");
        assert_eq!(grammar.productions_for("simple").count(), 2);
    }
}
