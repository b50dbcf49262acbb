//! Legality queries for win and kan declarations.
//!
//! Queries never fail: any input that does not satisfy the rule answers
//! `false`. Yaku are not checked for wins, and kan queries do not check
//! hand shape or the four-kan limit.

use crate::hand::Hand;
use crate::oracle::{RulesOracle, StandardRules};
use crate::shanten::COMPLETE;
use crate::tile::{Tile, TILE_KINDS};
use tracing::debug;

/// Answers call-legality questions using a rules oracle
#[derive(Debug, Clone, Default)]
pub struct CallEngine<O = StandardRules> {
    oracle: O,
}

impl<O: RulesOracle> CallEngine<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Whether `hand` plus the drawn `atari` tile is a complete shape.
    /// No drawn tile means no win.
    pub fn can_tsumo(&self, hand: &Hand, atari: Option<Tile>) -> bool {
        let Some(atari) = atari else {
            return false;
        };
        let drawn = hand.clone().with_tile(atari);
        let shanten = self.oracle.shanten(&drawn);
        debug!(hand = %drawn, shanten, "tsumo check");
        shanten == COMPLETE
    }

    /// Whether any tile could be declared as a closed kan after drawing
    /// `tsumo`. Never allowed once the wall is empty.
    pub fn can_ankan(&self, hand: &Hand, tsumo: Option<Tile>, nokori: u32) -> bool {
        if nokori == 0 {
            return false;
        }
        let candidates = ankan_candidates(&with_drawn(hand, tsumo));
        debug!(%hand, ?tsumo, ?candidates, "closed kan check");
        !candidates.is_empty()
    }

    /// Whether any open triplet could be upgraded after drawing `tsumo`.
    /// Never allowed once the wall is empty.
    pub fn can_kakan(&self, hand: &Hand, tsumo: Option<Tile>, nokori: u32) -> bool {
        if nokori == 0 {
            return false;
        }
        let candidates = self.oracle.kakan_candidates(&with_drawn(hand, tsumo));
        debug!(%hand, ?tsumo, ?candidates, "added kan check");
        !candidates.is_empty()
    }
}

/// Tile kinds held four or more times in the concealed region, in
/// canonical order
pub fn ankan_candidates(hand: &Hand) -> Vec<Tile> {
    let counts = hand.concealed_counts();
    (0..TILE_KINDS)
        .filter(|&i| counts[i] >= 4)
        .filter_map(Tile::from_index)
        .collect()
}

fn with_drawn(hand: &Hand, tsumo: Option<Tile>) -> Hand {
    match tsumo {
        Some(tile) => hand.clone().with_tile(tile),
        None => hand.clone(),
    }
}
