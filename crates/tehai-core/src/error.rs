//! Errors raised while reading tile codes and hand strings.

use thiserror::Error;

/// Errors that can occur when parsing tiles, hands or display codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("unknown suit character '{0}'")]
    UnknownSuit(char),

    #[error("rank '{rank}' is out of range for suit '{suit}'")]
    InvalidRank { rank: char, suit: char },

    #[error("ranks \"{0}\" are not followed by a suit")]
    MissingSuit(String),

    #[error("unexpected character '{found}' at byte {at}")]
    UnexpectedChar { found: char, at: usize },

    #[error("meld opened with '{open}' is never closed")]
    UnclosedMeld { open: char },

    #[error("meld opened with '{open}' is closed with '{close}'")]
    MismatchedBracket { open: char, close: char },

    #[error("empty meld at byte {0}")]
    EmptyMeld(usize),

    #[error("concealed tile found after the meld region at byte {0}")]
    ConcealedAfterMeld(usize),

    #[error("expected a single tile, found \"{0}\"")]
    NotASingleTile(String),

    #[error("unknown tile: {0}")]
    UnknownTile(String),
}
