//! Parser for the weighted-Pauli-sum record grammar.
//!
//! Records are separated by `S`; each record reads
//!
//! ```text
//! <sign> <magnitude> <op><site> ...
//! ```
//!
//! e.g. `- 0.25 Z0 X1`. The identity tag `I` needs no site index. Term
//! order in the resulting [`Hamiltonian`] matches record order.

use logos::Logos;

use grani_sim::{Hamiltonian, HamiltonianTerm, PauliOp, PauliString};

use crate::ROW_SEPARATOR;
use crate::error::{ParseError, ParseResult};

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum Token {
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[regex(r"[0-9]+(\.[0-9]*)?|\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // One or more letters and an optional site index; validated in
    // `parse_tag` so that e.g. `ZZ0` reports the whole offending token.
    #[regex(r"[A-Za-z]+[0-9]*", |lex| lex.slice().to_owned())]
    Tag(String),
}

/// Parse `S`-separated Hamiltonian records into a [`Hamiltonian`].
pub fn parse_hamiltonian(input: &str) -> ParseResult<Hamiltonian> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut terms = vec![];
    for (record, line) in input.split(ROW_SEPARATOR).enumerate() {
        terms.push(parse_record(record, line)?);
    }
    Ok(Hamiltonian::from_terms(terms))
}

fn parse_record(record: usize, line: &str) -> ParseResult<HamiltonianTerm> {
    let mut lexer = Token::lexer(line);
    let mut tokens: Vec<(Token, String)> = vec![];
    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.slice().to_string())),
            Err(()) => {
                return Err(ParseError::InvalidOperator {
                    record,
                    token: lexer.slice().to_string(),
                });
            }
        }
    }

    let mut tokens = tokens.into_iter();

    let sign = match tokens.next() {
        Some((Token::Plus, _)) => 1.0,
        Some((Token::Minus, _)) => -1.0,
        other => {
            return Err(ParseError::ExpectedSign {
                record,
                found: found_text(other),
            });
        }
    };

    let magnitude = match tokens.next() {
        Some((Token::Number(value), _)) => value,
        other => {
            return Err(ParseError::ExpectedMagnitude {
                record,
                found: found_text(other),
            });
        }
    };

    let mut ops = vec![];
    let mut seen_any = false;
    for (token, text) in tokens {
        let Token::Tag(tag) = token else {
            return Err(ParseError::InvalidOperator {
                record,
                token: text,
            });
        };
        seen_any = true;
        if let Some(op) = parse_tag(&tag) {
            ops.push(op);
        } else {
            return Err(ParseError::InvalidOperator { record, token: tag });
        }
    }
    if !seen_any {
        return Err(ParseError::MissingOperator { record });
    }

    // Identity tags contribute no operator; `from_ops` drops the
    // explicit (0, I) placeholder.
    Ok(HamiltonianTerm::new(
        sign * magnitude,
        PauliString::from_ops(ops),
    ))
}

/// Decode one operator tag. `I` (optionally indexed) is identity; X/Y/Z
/// require a site index. Returns `None` for anything else.
fn parse_tag(tag: &str) -> Option<(u32, PauliOp)> {
    let (letter, index) = tag.split_at(1);
    let op = match letter {
        "I" => {
            // Site is irrelevant for identity; index optional.
            if !index.is_empty() {
                index.parse::<u32>().ok()?;
            }
            return Some((0, PauliOp::I));
        }
        "X" => PauliOp::X,
        "Y" => PauliOp::Y,
        "Z" => PauliOp::Z,
        _ => return None,
    };
    if index.is_empty() {
        return None;
    }
    let site: u32 = index.parse().ok()?;
    Some((site, op))
}

fn found_text(token: Option<(Token, String)>) -> String {
    match token {
        Some((_, text)) => text,
        None => "end of record".to_string(),
    }
}
