use std::io::BufRead;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ScoreError;

/// One line of the strategy guide, tokens still undecoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub line: usize,
    pub opponent: char,
    pub encoded: char,
}

fn round_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\S) (\S)$").expect("round pattern compiles"))
}

impl Round {
    pub fn new(line: usize, opponent: char, encoded: char) -> Round {
        Round {
            line,
            opponent,
            encoded,
        }
    }

    pub fn parse(line: usize, s: &str) -> Result<Round, ScoreError> {
        let captures = round_pattern().captures(s).ok_or_else(|| {
            ScoreError::invalid(line, format!("expected \"<opponent> <self>\", got {:?}", s))
        })?;
        let token = |i: usize| captures[i].chars().next().unwrap_or_default();
        Ok(Round::new(line, token(1), token(2)))
    }
}

/// Reads every line as a round. Blank lines are only allowed at the end of
/// the input; one followed by another round is a malformed line. Line numbers
/// are 1-based.
pub fn read_rounds<R: BufRead>(reader: R) -> Result<Vec<Round>, ScoreError> {
    let mut rounds = Vec::new();
    let mut first_blank: Option<usize> = None;
    for (i, bytes) in reader.split(b'\n').enumerate() {
        let line_number = i + 1;
        let line = String::from_utf8(bytes?)
            .map_err(|_| ScoreError::invalid(line_number, "line is not valid UTF-8"))?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            first_blank.get_or_insert(line_number);
            continue;
        }
        if let Some(blank) = first_blank {
            return Err(ScoreError::invalid(blank, "blank line before end of input"));
        }
        rounds.push(Round::parse(line_number, line)?);
    }
    log::debug!("read {} rounds", rounds.len());
    Ok(rounds)
}
