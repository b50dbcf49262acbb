//! The rules oracle consulted by legality queries.

use crate::hand::Hand;
use crate::shanten;
use crate::tile::Tile;

/// Combinatorial rules the call engine delegates to.
///
/// Implementations must be pure: the same hand always gives the same answer.
pub trait RulesOracle {
    /// Shanten number of the hand, `-1` when it is a complete winning shape
    fn shanten(&self, hand: &Hand) -> i8;

    /// Tiles that could upgrade one of the hand's open triplets to a kan
    fn kakan_candidates(&self, hand: &Hand) -> Vec<Tile>;
}

impl<O: RulesOracle + ?Sized> RulesOracle for &O {
    fn shanten(&self, hand: &Hand) -> i8 {
        (**self).shanten(hand)
    }

    fn kakan_candidates(&self, hand: &Hand) -> Vec<Tile> {
        (**self).kakan_candidates(hand)
    }
}

/// Standard riichi rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardRules;

impl RulesOracle for StandardRules {
    fn shanten(&self, hand: &Hand) -> i8 {
        shanten::shanten(hand)
    }

    fn kakan_candidates(&self, hand: &Hand) -> Vec<Tile> {
        kakan_candidates(hand)
    }
}

/// Concealed tiles that match an open triplet, deduplicated and in
/// canonical order
pub fn kakan_candidates(hand: &Hand) -> Vec<Tile> {
    let mut candidates: Vec<Tile> = hand
        .concealed()
        .iter()
        .copied()
        .filter(|&t| hand.melds().iter().any(|m| m.is_open_triplet_of(t)))
        .collect();
    candidates.dedup();
    candidates
}
