/*
    This module generates random sentences from a grammar
*/

use rand::prelude::*;
use std::collections::HashMap;
use std::fmt::Display;

use crate::error_handling::*;
use crate::grammar::*;

#[derive(Debug, PartialEq)]
pub enum GenerateErrorType {
    // An undefined nonterminal was used
    UndefinedNonterminal(String),
}

impl ErrorType for GenerateErrorType {}

impl Display for GenerateErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateErrorType::UndefinedNonterminal(nonterminal) => write!(f, "No definition for nonterminal `{}`", nonterminal),
        }
    }
}

pub type GenerateError = Error<GenerateErrorType>;
pub type GenResult = Result<String, GenerateError>;

// Generates a sentence of the grammar's language. Grammars built by the
// translator give every recursive rule an epsilon alternative, so this
// terminates with probability 1
pub fn generate(grammar: &Grammar) -> GenResult {
    generate_nonterminal(&grammar.start_symbol, &grammar.rules)
}

fn generate_nonterminal(nonterminal: &String, rules: &HashMap<String, Rewrite>) -> GenResult {
    let rewrite = rules
        .get(nonterminal)
        .ok_or_else(|| GenerateError {
            position: Position::none(),
            error: GenerateErrorType::UndefinedNonterminal(nonterminal.clone())
        })?;
    return generate_rewrite(rewrite, rules);
}

fn generate_rewrite(rewrite: &Rewrite, rules: &HashMap<String, Rewrite>) -> GenResult {
    let alternative = match rewrite.choose(&mut thread_rng()) {
        Some(a) => a,
        None => &Vec::new(),
    };

    let mut result = String::new();
    for symbol in alternative {
        match symbol {
            Symbol::Terminal(c) => result.push(*c),
            Symbol::Nonterminal(name) => result.push_str(&generate_nonterminal(name, rules)?),
        }
    }

    return Ok(result);
}

#[cfg(test)]
mod tests {
    use crate::translator::translate;

    use super::*;

    #[test]
    fn generate_single_choice_grammar() {
        let (_, grammar) = translate("a(b)c").unwrap();

        assert_eq!(generate(&grammar).unwrap(), "abc");
    }

    #[test]
    fn generate_starred_grammar() {
        let (_, grammar) = translate("a*").unwrap();

        for _ in 0..20 {
            let sentence = generate(&grammar).unwrap();
            assert!(sentence.chars().all(|c| c == 'a'));
        }
    }

    #[test]
    fn generate_alternation_grammar() {
        let (_, grammar) = translate("a|b").unwrap();

        for _ in 0..20 {
            let sentence = generate(&grammar).unwrap();
            assert!(sentence == "a" || sentence == "b");
        }
    }

    #[test]
    fn generate_undefined_nonterminal() {
        let (_, mut grammar) = translate("a*").unwrap();
        grammar.rules.remove("<N0>");

        assert_eq!(generate(&grammar).unwrap_err(), GenerateError {
            position: Position::none(),
            error: GenerateErrorType::UndefinedNonterminal("<N0>".to_string())
        });
    }
}
