use crate::error_handling::Position;
use crate::grammar::Grammar;
use crate::grammar::Symbol::Nonterminal;

use super::TranslateErrorType::UnresolvedNonterminal;
use super::{Result, TranslateError};

fn unresolved(name: &str) -> TranslateError {
    TranslateError {
        position: Position::none(),
        error: UnresolvedNonterminal(name.to_owned())
    }
}

// Checks that every nonterminal mentioned anywhere in the grammar has a
// rule of its own. The translator always resolves its placeholders before
// returning, so a failure here is a bug in the translator.
pub fn verify_closure(grammar: &Grammar) -> Result<()> {
    if !grammar.rules.contains_key(&grammar.start_symbol) {
        return Err(unresolved(&grammar.start_symbol));
    }

    let dangling = grammar.rules.values()
        .flatten()
        .flatten()
        .filter_map(|symbol| match symbol {
            Nonterminal(name) => Some(name),
            _ => None
        })
        .find(|name| !grammar.rules.contains_key(*name));

    match dangling {
        Some(name) => Err(unresolved(name)),
        None => Ok(())
    }
}
