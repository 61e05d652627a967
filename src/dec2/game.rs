use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Rock,
    Paper,
    Scissors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Lose,
    Draw,
    Win,
}

impl Symbol {
    #[cfg(test)]
    pub fn all() -> Vec<Symbol> {
        vec![Symbol::Rock, Symbol::Paper, Symbol::Scissors]
    }

    fn from_rank(n: i32) -> Symbol {
        let n = (n % 3 + 3) % 3;
        match n {
            0 => Symbol::Rock,
            1 => Symbol::Paper,
            2 => Symbol::Scissors,
            _ => unreachable!("invalid result of mod 3"),
        }
    }

    fn rank(&self) -> i32 {
        match self {
            Symbol::Rock => 0,
            Symbol::Paper => 1,
            Symbol::Scissors => 2,
        }
    }

    pub fn value(&self) -> u32 {
        match self {
            Symbol::Rock => 1,
            Symbol::Paper => 2,
            Symbol::Scissors => 3,
        }
    }

    /// The symbol that beats this one.
    pub fn beaten_by(&self) -> Symbol {
        Symbol::from_rank(self.rank() + 1)
    }

    /// The symbol this one beats.
    pub fn beats(&self) -> Symbol {
        Symbol::from_rank(self.rank() - 1)
    }

    /// Outcome of playing `self` against `opponent`, from our side.
    pub fn play(&self, opponent: Symbol) -> Outcome {
        match (self.rank() - opponent.rank()).rem_euclid(3) {
            0 => Outcome::Draw,
            1 => Outcome::Win,
            _ => Outcome::Lose,
        }
    }

    /// What to throw against `self` to get `desired`.
    pub fn response_for(&self, desired: Outcome) -> Symbol {
        match desired {
            Outcome::Draw => *self,
            Outcome::Win => self.beaten_by(),
            Outcome::Lose => self.beats(),
        }
    }
}

impl Outcome {
    #[cfg(test)]
    pub fn all() -> Vec<Outcome> {
        vec![Outcome::Lose, Outcome::Draw, Outcome::Win]
    }

    pub fn bonus(&self) -> u32 {
        match self {
            Outcome::Lose => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Symbol::Rock => "rock",
            Symbol::Paper => "paper",
            Symbol::Scissors => "scissors",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::Lose => "lose",
            Outcome::Draw => "draw",
            Outcome::Win => "win",
        };
        write!(f, "{}", name)
    }
}

pub fn symbol_value(s: Symbol) -> u32 {
    s.value()
}

pub fn outcome_bonus(opponent: Symbol, me: Symbol) -> u32 {
    me.play(opponent).bonus()
}

pub fn score_round(opponent: Symbol, me: Symbol) -> u32 {
    symbol_value(me) + outcome_bonus(opponent, me)
}
