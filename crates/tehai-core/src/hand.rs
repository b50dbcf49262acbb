//! Structured hand state and the canonical hand string.
//!
//! A hand string has two regions with no separator between them:
//! - the concealed region, tile codes in canonical order
//! - the meld region, bracketed groups, `<...>` for a meld built from a
//!   claimed discard and `(...)` for a closed kan
//!
//! Melds are kept most-recent-first. [`Hand`] parses from and displays as
//! this string; everything else in the crate works on the structured form.

use crate::error::HandError;
use crate::tile::{self, Tile, TILE_KINDS};
use serde::{de, ser, Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a meld was formed, which decides its brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    /// Formed by claiming a discard (sequence, triplet, or a triplet later
    /// upgraded to an added kan)
    Open,
    /// Four tiles declared from the concealed hand
    ClosedKan,
}

impl MeldKind {
    /// Opening and closing bracket characters
    pub fn brackets(self) -> (char, char) {
        match self {
            MeldKind::Open => ('<', '>'),
            MeldKind::ClosedKan => ('(', ')'),
        }
    }

    fn from_open(c: char) -> Option<Self> {
        match c {
            '<' => Some(MeldKind::Open),
            '(' => Some(MeldKind::ClosedKan),
            _ => None,
        }
    }
}

/// A declared meld. Tiles are always in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meld {
    pub kind: MeldKind,
    #[serde(with = "crate::tile::tile_string")]
    pub tiles: Vec<Tile>,
}

impl Meld {
    /// Build a meld, sorting its tiles
    pub fn new(kind: MeldKind, mut tiles: Vec<Tile>) -> Self {
        tiles.sort_unstable();
        Self { kind, tiles }
    }

    pub fn closed_kan(tile: Tile) -> Self {
        Self {
            kind: MeldKind::ClosedKan,
            tiles: vec![tile; 4],
        }
    }

    /// Number of copies of `tile` in this meld
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// An open meld of exactly three copies of `tile`
    pub fn is_open_triplet_of(&self, tile: Tile) -> bool {
        self.kind == MeldKind::Open && self.tiles.len() == 3 && self.count(tile) == 3
    }

    pub(crate) fn insert_tile(&mut self, tile: Tile) {
        let pos = self.tiles.partition_point(|&t| t <= tile);
        self.tiles.insert(pos, tile);
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = self.kind.brackets();
        write!(f, "{}{}{}", open, tile::tiles_to_string(&self.tiles), close)
    }
}

/// A player's hand: concealed tiles plus declared melds
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    concealed: Vec<Tile>,
    melds: Vec<Meld>,
}

impl Hand {
    /// Create a hand. Concealed tiles are sorted; melds are taken in the
    /// given order (most recent first).
    pub fn new(mut concealed: Vec<Tile>, melds: Vec<Meld>) -> Self {
        concealed.sort_unstable();
        Self { concealed, melds }
    }

    /// Concealed tiles in canonical order
    pub fn concealed(&self) -> &[Tile] {
        &self.concealed
    }

    /// Declared melds, most recent first
    pub fn melds(&self) -> &[Meld] {
        &self.melds
    }

    /// Total tiles held, concealed and melded
    pub fn tile_count(&self) -> usize {
        self.concealed.len() + self.melds.iter().map(|m| m.tiles.len()).sum::<usize>()
    }

    /// Copies of `tile` in the concealed region
    pub fn count(&self, tile: Tile) -> usize {
        self.concealed.iter().filter(|&&t| t == tile).count()
    }

    /// Per-kind counts of the concealed region, indexed by [`Tile::index`].
    /// Counts saturate at `u8::MAX`.
    pub fn concealed_counts(&self) -> [u8; TILE_KINDS] {
        let mut counts = [0u8; TILE_KINDS];
        for t in &self.concealed {
            let c = &mut counts[t.index()];
            *c = c.saturating_add(1);
        }
        counts
    }

    /// Insert a tile into the concealed region, keeping canonical order
    pub fn add_tile(&mut self, tile: Tile) {
        let pos = self.concealed.partition_point(|&t| t <= tile);
        self.concealed.insert(pos, tile);
    }

    /// Owned variant of [`Hand::add_tile`] for state threading
    pub fn with_tile(mut self, tile: Tile) -> Self {
        self.add_tile(tile);
        self
    }

    /// Remove one concealed copy per occurrence in `tiles`.
    ///
    /// Tiles that are not held are skipped. Returns how many were removed.
    pub fn remove_tiles(&mut self, tiles: &[Tile]) -> usize {
        let mut removed = 0;
        for tile in tiles {
            if let Ok(pos) = self.concealed.binary_search(tile) {
                self.concealed.remove(pos);
                removed += 1;
            }
        }
        removed
    }

    /// Put a meld at the front of the meld region
    pub fn insert_meld(&mut self, meld: Meld) {
        self.melds.insert(0, meld);
    }

    pub(crate) fn melds_mut(&mut self) -> &mut [Meld] {
        &mut self.melds
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&tile::tiles_to_string(&self.concealed))?;
        for meld in &self.melds {
            write!(f, "{}", meld)?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s.find(|c: char| c == '<' || c == '(').unwrap_or(s.len());
        let (head, mut rest) = s.split_at(split);
        let concealed = tile::parse_run(head, 0)?;

        let mut melds = Vec::new();
        let mut offset = split;
        while let Some(open) = rest.chars().next() {
            let kind = match MeldKind::from_open(open) {
                Some(kind) => kind,
                None if open.is_ascii_digit() => return Err(HandError::ConcealedAfterMeld(offset)),
                None => return Err(HandError::UnexpectedChar { found: open, at: offset }),
            };

            let end = rest
                .find(|c: char| c == '>' || c == ')')
                .ok_or(HandError::UnclosedMeld { open })?;
            let close = rest[end..].chars().next().unwrap_or_default();
            if close != kind.brackets().1 {
                return Err(HandError::MismatchedBracket { open, close });
            }

            let body = &rest[1..end];
            if body.is_empty() {
                return Err(HandError::EmptyMeld(offset));
            }
            melds.push(Meld::new(kind, tile::parse_run(body, offset + 1)?));

            offset += end + 1;
            rest = &rest[end + 1..];
        }

        Ok(Hand::new(concealed, melds))
    }
}

impl ser::Serialize for Hand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> de::Deserialize<'de> for Hand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::parse_tiles;

    fn t(s: &str) -> Tile {
        s.parse().unwrap()
    }

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_concealed_and_melds() {
        let h = hand("1m2m3m<5p5p5p>(7z7z7z7z)");
        assert_eq!(h.concealed(), &[t("1m"), t("2m"), t("3m")]);
        assert_eq!(h.melds().len(), 2);
        assert_eq!(h.melds()[0].kind, MeldKind::Open);
        assert_eq!(h.melds()[0].tiles, vec![t("5p"); 3]);
        assert_eq!(h.melds()[1], Meld::closed_kan(t("7z")));
        assert_eq!(h.tile_count(), 10);
    }

    #[test]
    fn test_display_is_identity_on_canonical_strings() {
        for s in [
            "",
            "1m9m1p9p1s9s1z2z3z4z5z6z7z",
            "2m3m4m<1s2s3s>",
            "5z5z<3m4m5m>(1p1p1p1p)<6z6z6z6z>",
            "(2s2s2s2s)",
        ] {
            assert_eq!(hand(s).to_string(), s);
        }
    }

    #[test]
    fn test_compact_input_is_expanded() {
        assert_eq!(hand("123m<345m>").to_string(), "1m2m3m<3m4m5m>");
    }

    #[test]
    fn test_unsorted_input_is_canonicalised() {
        assert_eq!(hand("1z5m1m<5m3m4m>").to_string(), "1m5m1z<3m4m5m>");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "1m<2m2m2m".parse::<Hand>(),
            Err(HandError::UnclosedMeld { open: '<' })
        );
        assert_eq!(
            "1m<2m2m2m)".parse::<Hand>(),
            Err(HandError::MismatchedBracket { open: '<', close: ')' })
        );
        assert_eq!("1m<>".parse::<Hand>(), Err(HandError::EmptyMeld(2)));
        assert_eq!(
            "<2m2m2m>1m".parse::<Hand>(),
            Err(HandError::ConcealedAfterMeld(8))
        );
        assert!(matches!(
            "1m>".parse::<Hand>(),
            Err(HandError::UnexpectedChar { found: '>', at: 2 })
        ));
        assert!(matches!(
            "<1m<2m>".parse::<Hand>(),
            Err(HandError::UnexpectedChar { found: '<', at: 3 })
        ));
    }

    #[test]
    fn test_add_tile_keeps_order() {
        let mut h = hand("1m3m<5p5p5p>");
        h.add_tile(t("2m"));
        h.add_tile(t("1z"));
        h.add_tile(t("1m"));
        assert_eq!(h.to_string(), "1m1m2m3m1z<5p5p5p>");
    }

    #[test]
    fn test_remove_tiles_never_fabricates() {
        let mut h = hand("1m2m2m3m<5p5p5p>");
        let removed = h.remove_tiles(&parse_tiles("2m2m2m5p").unwrap());
        assert_eq!(removed, 2);
        assert_eq!(h.to_string(), "1m3m<5p5p5p>");
    }

    #[test]
    fn test_concealed_counts_ignore_melds() {
        let h = hand("5p5p<5p5p5p>");
        assert_eq!(h.concealed_counts()[t("5p").index()], 2);
        assert_eq!(h.count(t("5p")), 2);
    }

    #[test]
    fn test_hand_serde_as_string() {
        let h = hand("1m2m<3m3m3m>");
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, "\"1m2m<3m3m3m>\"");
        let back: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, h);
    }

    #[test]
    fn test_meld_serde_uses_tile_string() {
        let meld = Meld::new(MeldKind::Open, parse_tiles("5m3m4m").unwrap());
        let json = serde_json::to_string(&meld).unwrap();
        assert_eq!(json, r#"{"kind":"Open","tiles":"3m4m5m"}"#);
    }
}
