//! Replay script format and per-step output records.

use serde::{Deserialize, Serialize};
use tehai_core::{Call, Hand, Tile};

/// A replay script: a starting hand and the steps applied to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    pub hand: Hand,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One scripted event for the hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Step {
    /// Draw a tile with `nokori` tiles left in the wall
    Draw { tile: Tile, nokori: u32 },

    /// Discard a held tile
    Discard { tile: Tile },

    /// Declare a call
    Call(Call),
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Draw { .. } => "draw",
            Step::Discard { .. } => "discard",
            Step::Call(Call::Furo { .. }) => "furo",
            Step::Call(Call::Kakan { .. }) => "kakan",
            Step::Call(Call::Ankan { .. }) => "ankan",
        }
    }
}

/// Legality answers for a drawn tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legality {
    pub tsumo: bool,
    pub ankan: bool,
    pub kakan: bool,
}

/// Output line written after each step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub index: usize,
    pub step: String,
    pub hand: Hand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legality: Option<Legality>,
}
