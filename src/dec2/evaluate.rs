use std::fmt;
use std::str::FromStr;

use crate::decode::{decode_opponent_symbol, LiteralDecoder, OutcomeDecoder, SelfDecoder};
use crate::error::ScoreError;
use crate::game::score_round;
use crate::round::Round;

/// How the second column of the guide is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `X`/`Y`/`Z` name the symbol to throw.
    Literal,
    /// `X`/`Y`/`Z` name the outcome to aim for.
    OutcomeDirected,
}

impl Mode {
    fn decoder(&self) -> &'static dyn SelfDecoder {
        match self {
            Mode::Literal => &LiteralDecoder,
            Mode::OutcomeDirected => &OutcomeDecoder,
        }
    }
}

impl FromStr for Mode {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Mode, ScoreError> {
        match s {
            "1" => Ok(Mode::Literal),
            "2" => Ok(Mode::OutcomeDirected),
            other => Err(ScoreError::UnrecognizedMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Literal => write!(f, "literal"),
            Mode::OutcomeDirected => write!(f, "outcome-directed"),
        }
    }
}

fn score_one(round: &Round, decoder: &dyn SelfDecoder) -> Result<u32, ScoreError> {
    let opponent = decode_opponent_symbol(round.opponent).map_err(|e| e.at_line(round.line))?;
    let me = decoder
        .decode_self(opponent, round.encoded)
        .map_err(|e| e.at_line(round.line))?;
    let score = score_round(opponent, me);
    log::debug!(
        "line {}: {} vs {} ({}) scores {}",
        round.line,
        me,
        opponent,
        me.play(opponent),
        score
    );
    Ok(score)
}

/// Total score of the guide. The first bad token aborts the whole pass.
pub fn evaluate(rounds: &[Round], mode: Mode) -> Result<u32, ScoreError> {
    let decoder = mode.decoder();
    let total: u32 = itertools::process_results(
        rounds.iter().map(|round| score_one(round, decoder)),
        |scores| scores.sum(),
    )?;
    log::info!("scored {} rounds in {} mode", rounds.len(), mode);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Vec<Round> {
        vec![
            Round::new(1, 'A', 'Y'),
            Round::new(2, 'B', 'X'),
            Round::new(3, 'C', 'Z'),
        ]
    }

    #[rstest]
    #[case::literal(Mode::Literal, 15)]
    #[case::outcome_directed(Mode::OutcomeDirected, 12)]
    fn scores_sample_guide(#[case] mode: Mode, #[case] expected: u32) {
        assert_eq!(evaluate(&sample(), mode).unwrap(), expected);
    }

    #[rstest]
    #[case(Mode::Literal)]
    #[case(Mode::OutcomeDirected)]
    fn empty_guide_scores_zero(#[case] mode: Mode) {
        assert_eq!(evaluate(&[], mode).unwrap(), 0);
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let rounds = sample();
        for mode in [Mode::Literal, Mode::OutcomeDirected] {
            let first = evaluate(&rounds, mode).unwrap();
            let second = evaluate(&rounds, mode).unwrap();
            assert_eq!(first, second);
        }
    }

    #[rstest]
    #[case::bad_self_token(Round::new(2, 'A', 'W'))]
    #[case::bad_opponent_token(Round::new(2, 'D', 'X'))]
    #[case::swapped_columns(Round::new(2, 'X', 'A'))]
    fn bad_token_aborts_without_total(#[case] bad: Round) {
        for mode in [Mode::Literal, Mode::OutcomeDirected] {
            let rounds = vec![Round::new(1, 'A', 'Y'), bad, Round::new(3, 'C', 'Z')];
            match evaluate(&rounds, mode) {
                Err(ScoreError::InvalidInput { line, .. }) => assert_eq!(line, 2),
                other => panic!("expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn outcome_mode_bonus_matches_requested_outcome() {
        for opponent in ['A', 'B', 'C'] {
            for (token, bonus) in [('X', 0), ('Y', 3), ('Z', 6)] {
                let total = evaluate(&[Round::new(1, opponent, token)], Mode::OutcomeDirected)
                    .unwrap();
                let value = total - bonus;
                assert!((1..=3).contains(&value), "{} {} -> {}", opponent, token, total);
            }
        }
    }

    #[rstest]
    #[case("1", Mode::Literal)]
    #[case("2", Mode::OutcomeDirected)]
    fn parses_mode(#[case] s: &str, #[case] expected: Mode) {
        assert_eq!(s.parse::<Mode>().unwrap(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("3")]
    #[case("literal")]
    #[case("")]
    fn rejects_unknown_mode(#[case] s: &str) {
        assert!(matches!(
            s.parse::<Mode>(),
            Err(ScoreError::UnrecognizedMode(_))
        ));
    }
}
