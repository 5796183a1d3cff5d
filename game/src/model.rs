use std::fmt;

use catalog::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NotStarted,
    InProgress,
    /// Every item was found before the countdown ran out.
    Won,
    /// The countdown ran out first.
    Lost,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        matches!(self, Outcome::Won | Outcome::Lost)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::NotStarted => "NotStarted",
            Outcome::InProgress => "InProgress",
            Outcome::Won => "Won",
            Outcome::Lost => "Lost",
        };
        f.write_str(s)
    }
}

/// What a player click amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The item was retired; `promoted` took its slot.
    Found { promoted: Option<Item> },
    /// The click found the last item and won the game.
    Won,
    /// The item is not in the working set (hidden, already found, or unknown).
    Inactive,
    /// The game is already over.
    GameOver,
}
