//! Tile values and tile-string parsing.
//!
//! This module contains:
//! - Suits and tiles with their canonical order (suit-major, rank-minor)
//! - Dense tile indices for count tables
//! - Parsing of bracket-free tile strings in expanded (`1m2m3m`) and
//!   compact (`123m`) notation

use crate::error::HandError;
use serde::{de, ser, Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of distinct tile kinds (3 number suits of 9 plus 7 honors)
pub const TILE_KINDS: usize = 34;

/// Tile suit, declared in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Characters (`m`)
    Man,
    /// Circles (`p`)
    Pin,
    /// Bamboo (`s`)
    Sou,
    /// Winds and dragons (`z`)
    Honor,
}

impl Suit {
    /// All suits in canonical order
    pub const ALL: [Suit; 4] = [Suit::Man, Suit::Pin, Suit::Sou, Suit::Honor];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'm' => Some(Suit::Man),
            'p' => Some(Suit::Pin),
            's' => Some(Suit::Sou),
            'z' => Some(Suit::Honor),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Suit::Man => 'm',
            Suit::Pin => 'p',
            Suit::Sou => 's',
            Suit::Honor => 'z',
        }
    }

    /// Highest valid rank for this suit
    pub fn max_rank(self) -> u8 {
        match self {
            Suit::Honor => 7,
            _ => 9,
        }
    }

    fn offset(self) -> usize {
        match self {
            Suit::Man => 0,
            Suit::Pin => 9,
            Suit::Sou => 18,
            Suit::Honor => 27,
        }
    }
}

/// A single tile. Field order makes the derived `Ord` the canonical order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile {
    suit: Suit,
    rank: u8,
}

impl Tile {
    /// Create a tile, checking the rank against the suit
    pub fn new(suit: Suit, rank: u8) -> Result<Self, HandError> {
        if rank == 0 || rank > suit.max_rank() {
            return Err(HandError::InvalidRank {
                rank: char::from_digit(rank as u32 % 10, 10).unwrap_or('?'),
                suit: suit.as_char(),
            });
        }
        Ok(Self { suit, rank })
    }

    pub(crate) fn from_chars(rank: char, suit: char) -> Result<Self, HandError> {
        let suit_value = Suit::from_char(suit).ok_or(HandError::UnknownSuit(suit))?;
        let rank_value = rank
            .to_digit(10)
            .ok_or(HandError::InvalidRank { rank, suit })?;
        Tile::new(suit_value, rank_value as u8).map_err(|_| HandError::InvalidRank { rank, suit })
    }

    #[inline]
    pub fn suit(self) -> Suit {
        self.suit
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Dense index in `0..TILE_KINDS`, increasing with canonical order
    #[inline]
    pub fn index(self) -> usize {
        self.suit.offset() + self.rank as usize - 1
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= TILE_KINDS {
            return None;
        }
        let suit = Suit::ALL[(index / 9).min(3)];
        let rank = (index - suit.offset()) as u8 + 1;
        Some(Self { suit, rank })
    }

    /// Every tile kind once, in canonical order
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..TILE_KINDS).filter_map(Tile::from_index)
    }

    #[inline]
    pub fn is_honor(self) -> bool {
        self.suit == Suit::Honor
    }

    /// Ones and nines of the number suits
    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_honor() && (self.rank == 1 || self.rank == 9)
    }

    /// Terminal or honor
    #[inline]
    pub fn is_yaochu(self) -> bool {
        self.is_honor() || self.is_terminal()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.as_char())
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Tile {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => Tile::from_chars(rank, suit),
            _ => Err(HandError::NotASingleTile(s.to_string())),
        }
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile code such as \"5p\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

/// Parse a bracket-free tile string.
///
/// Accepts expanded (`3m4m`) and compact (`34m`) notation, or any mix of
/// the two. Tiles are returned in input order.
pub fn parse_tiles(s: &str) -> Result<Vec<Tile>, HandError> {
    parse_run(s, 0)
}

/// Write tiles in expanded notation
pub fn tiles_to_string(tiles: &[Tile]) -> String {
    tiles.iter().map(|t| t.to_string()).collect()
}

/// `offset` is the byte position of `s` in the enclosing hand string.
pub(crate) fn parse_run(s: &str, offset: usize) -> Result<Vec<Tile>, HandError> {
    let mut tiles = Vec::new();
    let mut ranks = String::new();

    for (at, c) in s.char_indices() {
        if c.is_ascii_digit() {
            ranks.push(c);
            continue;
        }
        if ranks.is_empty() {
            return Err(HandError::UnexpectedChar {
                found: c,
                at: offset + at,
            });
        }
        if Suit::from_char(c).is_none() && !c.is_ascii_alphabetic() {
            return Err(HandError::UnexpectedChar {
                found: c,
                at: offset + at,
            });
        }
        for rank in ranks.chars() {
            tiles.push(Tile::from_chars(rank, c)?);
        }
        ranks.clear();
    }

    if !ranks.is_empty() {
        return Err(HandError::MissingSuit(ranks));
    }
    Ok(tiles)
}

/// Serde adapter that writes a tile list as one tile string
pub mod tile_string {
    use super::{parse_tiles, tiles_to_string, Tile};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(tiles: &[Tile], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&tiles_to_string(tiles))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Tile>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_tiles(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Tile {
        s.parse().unwrap()
    }

    #[test]
    fn test_tile_display_round_trip() {
        for tile in Tile::all() {
            assert_eq!(tile.to_string().parse::<Tile>().unwrap(), tile);
        }
    }

    #[test]
    fn test_canonical_order_is_suit_major() {
        assert!(t("9m") < t("1p"));
        assert!(t("9p") < t("1s"));
        assert!(t("9s") < t("1z"));
        assert!(t("2z") < t("7z"));
        assert!(t("1m") < t("2m"));
    }

    #[test]
    fn test_index_matches_order() {
        let all: Vec<Tile> = Tile::all().collect();
        assert_eq!(all.len(), TILE_KINDS);
        for (i, tile) in all.iter().enumerate() {
            assert_eq!(tile.index(), i);
            assert_eq!(Tile::from_index(i), Some(*tile));
        }
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Tile::from_index(TILE_KINDS), None);
    }

    #[test]
    fn test_honor_rank_limit() {
        assert_eq!(
            "8z".parse::<Tile>(),
            Err(HandError::InvalidRank { rank: '8', suit: 'z' })
        );
        assert!("7z".parse::<Tile>().is_ok());
        assert!("0m".parse::<Tile>().is_err());
    }

    #[test]
    fn test_single_tile_parse_errors() {
        assert_eq!("5x".parse::<Tile>(), Err(HandError::UnknownSuit('x')));
        assert!(matches!(
            "5m5m".parse::<Tile>(),
            Err(HandError::NotASingleTile(_))
        ));
        assert!(matches!("".parse::<Tile>(), Err(HandError::NotASingleTile(_))));
    }

    #[test]
    fn test_parse_tiles_both_notations() {
        let expanded = parse_tiles("3m4m5p").unwrap();
        let compact = parse_tiles("34m5p").unwrap();
        assert_eq!(expanded, compact);
        assert_eq!(expanded, vec![t("3m"), t("4m"), t("5p")]);
    }

    #[test]
    fn test_parse_tiles_keeps_input_order() {
        assert_eq!(parse_tiles("5m3m").unwrap(), vec![t("5m"), t("3m")]);
    }

    #[test]
    fn test_parse_tiles_errors() {
        assert_eq!(parse_tiles("12"), Err(HandError::MissingSuit("12".into())));
        assert_eq!(
            parse_tiles("m1"),
            Err(HandError::UnexpectedChar { found: 'm', at: 0 })
        );
        assert_eq!(parse_tiles("1q"), Err(HandError::UnknownSuit('q')));
        assert!(matches!(
            parse_tiles("1m<2m"),
            Err(HandError::UnexpectedChar { found: '<', .. })
        ));
        assert_eq!(parse_tiles("").unwrap(), vec![]);
    }

    #[test]
    fn test_tile_serde_as_string() {
        let json = serde_json::to_string(&t("6z")).unwrap();
        assert_eq!(json, "\"6z\"");
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t("6z"));
        assert!(serde_json::from_str::<Tile>("\"9z\"").is_err());
    }

    #[test]
    fn test_yaochu_classification() {
        assert!(t("1m").is_yaochu());
        assert!(t("9s").is_terminal());
        assert!(t("5z").is_honor());
        assert!(!t("5p").is_yaochu());
    }
}
