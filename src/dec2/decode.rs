use crate::error::ScoreError;
use crate::game::{Outcome, Symbol};

/// Turns the second column of a round into the symbol we throw.
pub trait SelfDecoder {
    fn decode_self(&self, opponent: Symbol, token: char) -> Result<Symbol, DecodeError>;
}

/// A token outside the alphabet expected for its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    pub token: char,
    pub column: &'static str,
}

impl DecodeError {
    pub fn at_line(self, line: usize) -> ScoreError {
        ScoreError::invalid(
            line,
            format!("unexpected {} token {:?}", self.column, self.token),
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LiteralDecoder;

#[derive(Debug, Clone, Copy)]
pub struct OutcomeDecoder;

pub fn decode_opponent_symbol(token: char) -> Result<Symbol, DecodeError> {
    match token {
        'A' => Ok(Symbol::Rock),
        'B' => Ok(Symbol::Paper),
        'C' => Ok(Symbol::Scissors),
        other => Err(DecodeError {
            token: other,
            column: "opponent",
        }),
    }
}

pub fn decode_self_symbol_literal(token: char) -> Result<Symbol, DecodeError> {
    match token {
        'X' => Ok(Symbol::Rock),
        'Y' => Ok(Symbol::Paper),
        'Z' => Ok(Symbol::Scissors),
        other => Err(DecodeError {
            token: other,
            column: "self",
        }),
    }
}

fn decode_desired_outcome(token: char) -> Result<Outcome, DecodeError> {
    match token {
        'X' => Ok(Outcome::Lose),
        'Y' => Ok(Outcome::Draw),
        'Z' => Ok(Outcome::Win),
        other => Err(DecodeError {
            token: other,
            column: "desired outcome",
        }),
    }
}

pub fn decode_self_symbol_from_outcome(
    opponent: Symbol,
    token: char,
) -> Result<Symbol, DecodeError> {
    let desired = decode_desired_outcome(token)?;
    Ok(opponent.response_for(desired))
}

impl SelfDecoder for LiteralDecoder {
    fn decode_self(&self, _opponent: Symbol, token: char) -> Result<Symbol, DecodeError> {
        decode_self_symbol_literal(token)
    }
}

impl SelfDecoder for OutcomeDecoder {
    fn decode_self(&self, opponent: Symbol, token: char) -> Result<Symbol, DecodeError> {
        decode_self_symbol_from_outcome(opponent, token)
    }
}
