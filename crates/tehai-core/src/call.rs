//! Call declarations and the hand mutations they perform.
//!
//! Every mutation consumes the hand and returns the new one, so callers
//! thread hand state explicitly. None of them re-validate legality; that is
//! the job of [`crate::engine::CallEngine`] before the call is declared.

use crate::hand::{Hand, Meld, MeldKind};
use crate::tile::Tile;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A call a player can declare against their hand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Call {
    /// Claim a discard, completing a meld with tiles from the concealed hand
    Furo {
        discard: Tile,
        #[serde(with = "crate::tile::tile_string")]
        used: Vec<Tile>,
    },
    /// Upgrade an open triplet to a kan with a held tile
    Kakan { tile: Tile },
    /// Declare four held tiles as a closed kan
    Ankan { tile: Tile },
}

impl Hand {
    /// Apply a call value
    pub fn apply(self, call: &Call) -> Hand {
        match call {
            Call::Furo { discard, used } => self.declare_open_meld(*discard, used),
            Call::Kakan { tile } => self.declare_added_kan(*tile),
            Call::Ankan { tile } => self.declare_closed_kan(*tile),
        }
    }

    /// Claim `discard`, completing a meld with `used` from the concealed
    /// region. The meld is sorted and goes to the front of the meld region.
    /// Meld shape is not checked.
    pub fn declare_open_meld(mut self, discard: Tile, used: &[Tile]) -> Hand {
        self.remove_tiles(used);
        let mut tiles = used.to_vec();
        tiles.push(discard);
        let meld = Meld::new(MeldKind::Open, tiles);
        trace!(%meld, "open meld declared");
        self.insert_meld(meld);
        self
    }

    /// Upgrade an open triplet of `tile` to four tiles.
    ///
    /// One copy leaves the concealed region, then the first run of three
    /// `tile` codes in the whole hand string becomes four. The search is not
    /// limited to melds: if the concealed region still holds three copies,
    /// that run is found first and the concealed region gets the copy back.
    /// With no run of three anywhere, only the removal happens.
    pub fn declare_added_kan(mut self, tile: Tile) -> Hand {
        self.remove_tiles(&[tile]);

        // Runs of equal tiles are contiguous in every region because all
        // regions are sorted, so a count of three is a run of three.
        if self.count(tile) >= 3 {
            trace!(%tile, "added kan matched the concealed region");
            self.add_tile(tile);
        } else if let Some(meld) = self.melds_mut().iter_mut().find(|m| m.count(tile) >= 3) {
            meld.insert_tile(tile);
            trace!(%meld, "added kan declared");
        }
        self
    }

    /// Move four copies of `tile` into a closed kan at the front of the
    /// meld region
    pub fn declare_closed_kan(mut self, tile: Tile) -> Hand {
        self.remove_tiles(&[tile; 4]);
        let meld = Meld::closed_kan(tile);
        trace!(%meld, "closed kan declared");
        self.insert_meld(meld);
        self
    }
}
