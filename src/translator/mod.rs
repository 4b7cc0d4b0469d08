/*
    This module translates restricted regular expressions into
    context-free grammars
*/

mod lexer;
mod verifier;

use std::collections::HashMap;
use std::fmt::Display;
use std::mem;

use crate::error_handling::*;
use crate::grammar::*;
use lexer::{lex_pattern, Token};

#[derive(Debug, PartialEq)]
pub enum TranslateErrorType {
    // The pattern is empty or all whitespace
    EmptyPattern,
    // A character outside the supported subset (letters, `(`, `)`, `|`, `*`)
    UnsupportedCharacter(char),
    // A `(` that is never closed
    UnbalancedOpenParenthesis,
    // A `)` with no matching `(`
    UnbalancedCloseParenthesis,
    // A `*` with no symbol or group in front of it
    DanglingStar,
    // A `|` with nothing on one side of it
    EmptyAlternative,
    // A finished grammar referenced an undefined nonterminal
    // This is a problem with regram, not the pattern
    UnresolvedNonterminal(String),
}

impl ErrorType for TranslateErrorType {}

impl Display for TranslateErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateErrorType::EmptyPattern => write!(f, "Pattern is empty"),
            TranslateErrorType::UnsupportedCharacter(c) => write!(f, "Unsupported character `{}`", c),
            TranslateErrorType::UnbalancedOpenParenthesis => write!(f, "Unmatched `(`"),
            TranslateErrorType::UnbalancedCloseParenthesis => write!(f, "Unmatched `)`"),
            TranslateErrorType::DanglingStar => write!(f, "`*` must follow a symbol or a group"),
            TranslateErrorType::EmptyAlternative => write!(f, "`|` with an empty alternative"),
            TranslateErrorType::UnresolvedNonterminal(name) => write!(f, "No rule for `{}` (this is a problem with regram, not the pattern)", name),
        }
    }
}

pub type TranslateError = Error<TranslateErrorType>;
pub type Result<T> = std::result::Result<T, TranslateError>;

pub const START_SYMBOL: &str = "<S>";

fn fail<T>(position: Position, error: TranslateErrorType) -> Result<T> {
    Err(TranslateError { position, error })
}

// Fresh nonterminal names, unique within one translation. The start symbol
// is reserved and never handed out
struct NameAllocator {
    next: usize
}

impl NameAllocator {
    fn new() -> Self {
        NameAllocator { next: 0 }
    }

    fn fresh(&mut self) -> String {
        let name = format!("<N{}>", self.next);
        self.next += 1;
        return name;
    }
}

// One open group: the alternatives completed so far and the concatenation
// still being accumulated
struct Frame {
    open_position: Position,
    alternatives: Rewrite,
    pending: Alternative,
    last_or: Option<Position>
}

impl Frame {
    fn new(open_position: Position) -> Self {
        Frame {
            open_position,
            alternatives: Vec::new(),
            pending: Alternative::new(),
            last_or: None
        }
    }

    // Completes the current alternative at a `|`
    fn split(&mut self, position: Position) -> Result<()> {
        if self.pending.is_empty() {
            return fail(position, TranslateErrorType::EmptyAlternative);
        }
        self.alternatives.push(mem::take(&mut self.pending));
        self.last_or = Some(position);
        Ok(())
    }

    // Completes the last alternative when the frame closes. An empty group
    // becomes a single epsilon alternative; a trailing `|` is an error
    fn finish(mut self) -> Result<Rewrite> {
        if self.pending.is_empty() {
            if let Some(position) = self.last_or {
                return fail(position, TranslateErrorType::EmptyAlternative);
            }
            self.alternatives.push(Alternative::new());
        } else {
            self.alternatives.push(self.pending);
        }
        return Ok(self.alternatives);
    }
}

pub fn translate(pattern: &str) -> Result<(Alphabet, Grammar)> {
    let lexed = lex_pattern(pattern)?;
    if lexed.is_empty() {
        return fail(Position::none(), TranslateErrorType::EmptyPattern);
    }

    let mut alphabet = Alphabet::new();
    let mut rules = HashMap::<String, Rewrite>::new();
    let mut names = NameAllocator::new();

    // `current` is the innermost open group; `parents` holds the groups it
    // is nested in, outermost first
    let mut current = Frame::new(Position::none());
    let mut parents = Vec::<Frame>::new();

    let mut tokens = lexed.into_iter().peekable();
    while let Some((position, token)) = tokens.next() {
        let starred = matches!(tokens.peek(), Some((_, Token::Star)));

        match token {
            Token::Symbol(c) => {
                alphabet.insert(c);
                if starred {
                    tokens.next();
                    let name = names.fresh();
                    rules.insert(name.clone(), vec![
                        vec![Symbol::Terminal(c), Symbol::Nonterminal(name.clone())],
                        Alternative::new()
                    ]);
                    current.pending.push(Symbol::Nonterminal(name));
                } else {
                    current.pending.push(Symbol::Terminal(c));
                }
            }
            Token::Open => {
                parents.push(mem::replace(&mut current, Frame::new(position)));
            }
            Token::Close => {
                let parent = match parents.pop() {
                    Some(parent) => parent,
                    None => return fail(position, TranslateErrorType::UnbalancedCloseParenthesis)
                };
                let closed = mem::replace(&mut current, parent);

                let group_name = names.fresh();
                rules.insert(group_name.clone(), closed.finish()?);

                if starred {
                    tokens.next();
                    let star_name = names.fresh();
                    rules.insert(star_name.clone(), vec![
                        vec![Symbol::Nonterminal(group_name), Symbol::Nonterminal(star_name.clone())],
                        Alternative::new()
                    ]);
                    current.pending.push(Symbol::Nonterminal(star_name));
                } else {
                    current.pending.push(Symbol::Nonterminal(group_name));
                }
            }
            Token::Or => current.split(position)?,
            Token::Star => return fail(position, TranslateErrorType::DanglingStar)
        }
    }

    if !parents.is_empty() {
        return fail(current.open_position, TranslateErrorType::UnbalancedOpenParenthesis);
    }
    rules.insert(START_SYMBOL.to_string(), current.finish()?);

    let grammar = Grammar {
        start_symbol: START_SYMBOL.to_string(),
        rules
    };
    verifier::verify_closure(&grammar)?;

    return Ok((alphabet, grammar));
}
