/*
    This module is for storing and printing grammars
*/

use std::collections::{BTreeSet, HashMap};
use std::fmt::Display;

use itertools::Itertools;

// The terminals seen while translating a pattern, sorted on iteration
pub type Alphabet = BTreeSet<char>;

// The base unit in a grammar rule
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Symbol {
    Terminal(char),
    Nonterminal(String),
}

// The symbols in a single alternative; empty means epsilon
pub type Alternative = Vec<Symbol>;

// The alternatives of a rewrite rule
pub type Rewrite = Vec<Alternative>;

pub const EPSILON: &str = "ε";

#[derive(Debug, PartialEq)]
pub struct Grammar {
    pub start_symbol: String,
    pub rules: HashMap<String, Rewrite>,
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Terminal(c) => write!(f, "{}", c),
            Symbol::Nonterminal(name) => write!(f, "{}", name),
        }
    }
}

fn format_alternative(alternative: &Alternative) -> String {
    if alternative.is_empty() {
        return EPSILON.to_string();
    }
    alternative.iter().map(Symbol::to_string).collect()
}

fn format_rewrite(rewrite: &Rewrite) -> String {
    rewrite.iter().map(format_alternative).join(" | ")
}

impl Display for Grammar {
    // Start rule first, remaining rules in name order, so the same grammar
    // always prints the same way
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let empty = Vec::new();
        let start_rewrite = self.rules.get(&self.start_symbol).unwrap_or(&empty);
        write!(f, "{} -> {}", self.start_symbol, format_rewrite(start_rewrite))?;

        let rest = self.rules.keys()
            .filter(|name| **name != self.start_symbol)
            .sorted();
        for name in rest {
            write!(f, "\n{} -> {}", name, format_rewrite(&self.rules[name]))?;
        }

        Ok(())
    }
}
