//! String-level API over canonical hand strings.
//!
//! These functions are what a game UI or round controller calls: each takes
//! the full hand string and returns a new string or a boolean. Mutations
//! report malformed input as [`HandError`]; legality queries answer `false`
//! for it instead.

use crate::engine::CallEngine;
use crate::error::HandError;
use crate::hand::Hand;
use crate::oracle::{RulesOracle, StandardRules};
use crate::tile::{parse_tiles, Tile};
use crate::Call;
use tracing::debug;

/// Claim `sute` with the `hai_used` tiles, inserting the new open meld at
/// the front of the meld region
pub fn set_furo(tehai: &str, sute: &str, hai_used: &str) -> Result<String, HandError> {
    let hand: Hand = tehai.parse()?;
    let discard: Tile = sute.parse()?;
    let used = parse_tiles(hai_used)?;
    Ok(hand.declare_open_meld(discard, &used).to_string())
}

/// Upgrade an open triplet with `kakan_hai`; see [`Hand::declare_added_kan`]
/// for how the run of three is located
pub fn set_kakan(tehai: &str, kakan_hai: &str) -> Result<String, HandError> {
    let hand: Hand = tehai.parse()?;
    let tile: Tile = kakan_hai.parse()?;
    Ok(hand.declare_added_kan(tile).to_string())
}

/// Declare a closed kan of `ankan_hai`
pub fn set_ankan(tehai: &str, ankan_hai: &str) -> Result<String, HandError> {
    let hand: Hand = tehai.parse()?;
    let tile: Tile = ankan_hai.parse()?;
    Ok(hand.declare_closed_kan(tile).to_string())
}

/// Apply a call to a hand string
pub fn apply_call(tehai: &str, call: &Call) -> Result<String, HandError> {
    let hand: Hand = tehai.parse()?;
    Ok(hand.apply(call).to_string())
}

pub fn can_tsumo(tehai: &str, atari_hai: &str) -> bool {
    can_tsumo_with(&CallEngine::<StandardRules>::default(), tehai, atari_hai)
}

pub fn can_ankan(tehai: &str, tsumo_hai: &str, nokori: u32) -> bool {
    can_ankan_with(&CallEngine::<StandardRules>::default(), tehai, tsumo_hai, nokori)
}

pub fn can_kakan(tehai: &str, tsumo_hai: &str, nokori: u32) -> bool {
    can_kakan_with(&CallEngine::<StandardRules>::default(), tehai, tsumo_hai, nokori)
}

/// [`can_tsumo`] against a specific engine. An empty `atari_hai` is never a
/// win.
pub fn can_tsumo_with<O: RulesOracle>(
    engine: &CallEngine<O>,
    tehai: &str,
    atari_hai: &str,
) -> bool {
    if atari_hai.is_empty() {
        return false;
    }
    match read_query(tehai, atari_hai) {
        Some((hand, tile)) => engine.can_tsumo(&hand, tile),
        None => false,
    }
}

/// [`can_ankan`] against a specific engine. An empty `tsumo_hai` means no
/// drawn tile.
pub fn can_ankan_with<O: RulesOracle>(
    engine: &CallEngine<O>,
    tehai: &str,
    tsumo_hai: &str,
    nokori: u32,
) -> bool {
    match read_query(tehai, tsumo_hai) {
        Some((hand, tile)) => engine.can_ankan(&hand, tile, nokori),
        None => false,
    }
}

/// [`can_kakan`] against a specific engine. An empty `tsumo_hai` means no
/// drawn tile.
pub fn can_kakan_with<O: RulesOracle>(
    engine: &CallEngine<O>,
    tehai: &str,
    tsumo_hai: &str,
    nokori: u32,
) -> bool {
    match read_query(tehai, tsumo_hai) {
        Some((hand, tile)) => engine.can_kakan(&hand, tile, nokori),
        None => false,
    }
}

fn read_query(tehai: &str, drawn: &str) -> Option<(Hand, Option<Tile>)> {
    let hand = match tehai.parse::<Hand>() {
        Ok(hand) => hand,
        Err(e) => {
            debug!(tehai, error = %e, "unreadable hand in legality query");
            return None;
        }
    };
    if drawn.is_empty() {
        return Some((hand, None));
    }
    match drawn.parse::<Tile>() {
        Ok(tile) => Some((hand, Some(tile))),
        Err(e) => {
            debug!(drawn, error = %e, "unreadable drawn tile in legality query");
            None
        }
    }
}
