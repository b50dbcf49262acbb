//! Shanten numbers.
//!
//! The shanten number is how many tile exchanges a hand is away from
//! completion; [`COMPLETE`] (-1) means the hand is already a winning shape.
//! Three shapes are considered:
//! - regular: four sets and a pair, where every declared meld is one set
//! - seven pairs (closed hands only)
//! - thirteen orphans (closed hands only)

use crate::hand::Hand;
use crate::tile::{Tile, TILE_KINDS};

/// Shanten value of a complete hand
pub const COMPLETE: i8 = -1;

/// Sets in a regular winning hand
const SETS_PER_HAND: i8 = 4;

/// Lowest shanten over all applicable shapes
pub fn shanten(hand: &Hand) -> i8 {
    let counts = hand.concealed_counts();
    let melds = hand.melds().len();

    let regular = regular_shanten(&counts, melds);
    if melds > 0 {
        return regular;
    }
    regular
        .min(chiitoitsu_shanten(&counts))
        .min(kokushi_shanten(&counts))
}

/// Shanten toward four sets and a pair, with `melds` sets already declared
pub fn regular_shanten(counts: &[u8; TILE_KINDS], melds: usize) -> i8 {
    let required = SETS_PER_HAND - melds.min(SETS_PER_HAND as usize) as i8;
    let mut search = Search {
        counts: *counts,
        required,
        best: 2 * required,
    };
    search.scan(0, 0, 0, false);
    search.best
}

/// Shanten toward seven distinct pairs
pub fn chiitoitsu_shanten(counts: &[u8; TILE_KINDS]) -> i8 {
    let pairs = counts.iter().filter(|&&c| c >= 2).count().min(7) as i8;
    let kinds = counts.iter().filter(|&&c| c >= 1).count() as i8;
    6 - pairs + (7 - kinds).max(0)
}

/// Shanten toward one of each terminal and honor plus a pair of one of them
pub fn kokushi_shanten(counts: &[u8; TILE_KINDS]) -> i8 {
    let mut kinds = 0;
    let mut paired = false;
    for tile in Tile::all().filter(|t| t.is_yaochu()) {
        let c = counts[tile.index()];
        if c >= 1 {
            kinds += 1;
        }
        if c >= 2 {
            paired = true;
        }
    }
    13 - kinds - i8::from(paired)
}

/// Exhaustive decomposition of the concealed tiles into sets, partial sets
/// and a pair. Sets stop at `required` and partials at `required - sets`;
/// groups beyond that never lower the value, and the cap keeps the search
/// bounded for oversized hands.
struct Search {
    counts: [u8; TILE_KINDS],
    required: i8,
    best: i8,
}

impl Search {
    fn scan(&mut self, mut i: usize, sets: i8, partials: i8, pair: bool) {
        if self.best == COMPLETE {
            return;
        }
        while i < TILE_KINDS && self.counts[i] == 0 {
            i += 1;
        }
        if i == TILE_KINDS {
            let value = self.value(sets, partials, pair);
            self.best = self.best.min(value);
            return;
        }

        // Position within a number suit, `None` for honors
        let pos = (i < 27).then_some(i % 9);

        let more_sets = sets < self.required;
        let more_partials = sets + partials < self.required;

        if more_sets && self.counts[i] >= 3 {
            self.counts[i] -= 3;
            self.scan(i, sets + 1, partials, pair);
            self.counts[i] += 3;
        }
        if more_sets
            && pos.is_some_and(|p| p <= 6)
            && self.counts[i + 1] > 0
            && self.counts[i + 2] > 0
        {
            self.take(&[i, i + 1, i + 2]);
            self.scan(i, sets + 1, partials, pair);
            self.put_back(&[i, i + 1, i + 2]);
        }
        if self.counts[i] >= 2 {
            self.counts[i] -= 2;
            if !pair {
                self.scan(i, sets, partials, true);
            }
            if more_partials {
                self.scan(i, sets, partials + 1, pair);
            }
            self.counts[i] += 2;
        }
        if more_partials && pos.is_some_and(|p| p <= 7) && self.counts[i + 1] > 0 {
            self.take(&[i, i + 1]);
            self.scan(i, sets, partials + 1, pair);
            self.put_back(&[i, i + 1]);
        }
        if more_partials && pos.is_some_and(|p| p <= 6) && self.counts[i + 2] > 0 {
            self.take(&[i, i + 2]);
            self.scan(i, sets, partials + 1, pair);
            self.put_back(&[i, i + 2]);
        }

        // Leave the remaining copies of this kind unused
        let held = self.counts[i];
        self.counts[i] = 0;
        self.scan(i + 1, sets, partials, pair);
        self.counts[i] = held;
    }

    fn value(&self, sets: i8, partials: i8, pair: bool) -> i8 {
        let sets = sets.min(self.required);
        let partials = partials.min(self.required - sets);
        2 * self.required - 2 * sets - partials - i8::from(pair)
    }

    fn take(&mut self, idx: &[usize]) {
        for &i in idx {
            self.counts[i] -= 1;
        }
    }

    fn put_back(&mut self, idx: &[usize]) {
        for &i in idx {
            self.counts[i] += 1;
        }
    }
}
