//! Tile artwork lookup for the browser client.
//!
//! Tiles are drawn with the awayuki mahjong emoji set. Each tile code maps
//! to an emoji key, and each key to an image URL.

use crate::error::HandError;
use crate::tile::{Suit, Tile};

/// Code used for a face-down tile
pub const BACK: &str = "back";

/// Codes for the 100- and 1000-point sticks
pub const STICK_100: &str = "stick100";
pub const STICK_1000: &str = "stick1000";

const EMOJI_BASE_URL: &str = "https://awayuki.github.io/emoji";

const HONOR_KEYS: [&str; 7] = [
    "mahjong_east",
    "mahjong_south",
    "mahjong_west",
    "mahjong_north",
    "mahjong_white",
    "mahjong_green",
    "mahjong_red",
];

/// Emoji key for a tile code, or for [`BACK`], [`STICK_100`] and
/// [`STICK_1000`]
pub fn emoji_key(code: &str) -> Result<String, HandError> {
    if matches!(code, BACK | STICK_100 | STICK_1000) {
        return Ok(format!("mahjong_{}", code));
    }
    let tile: Tile = code
        .parse()
        .map_err(|_| HandError::UnknownTile(code.to_string()))?;
    Ok(tile_emoji_key(tile))
}

/// Image URL for any code [`emoji_key`] accepts
pub fn emoji_url(code: &str) -> Result<String, HandError> {
    let key = emoji_key(code)?;
    Ok(format!("{}/{}.png", EMOJI_BASE_URL, key.replace('_', "-")))
}

pub fn tile_emoji_key(tile: Tile) -> String {
    match tile.suit() {
        Suit::Honor => HONOR_KEYS[tile.rank() as usize - 1].to_string(),
        suit => format!("mahjong_{}{}", suit.as_char(), tile.rank()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_tiles_put_suit_first() {
        assert_eq!(emoji_key("3m").unwrap(), "mahjong_m3");
        assert_eq!(emoji_key("9s").unwrap(), "mahjong_s9");
    }

    #[test]
    fn test_honor_names() {
        assert_eq!(emoji_key("1z").unwrap(), "mahjong_east");
        assert_eq!(emoji_key("4z").unwrap(), "mahjong_north");
        assert_eq!(emoji_key("5z").unwrap(), "mahjong_white");
        assert_eq!(emoji_key("7z").unwrap(), "mahjong_red");
    }

    #[test]
    fn test_urls() {
        assert_eq!(
            emoji_url("5p").unwrap(),
            "https://awayuki.github.io/emoji/mahjong-p5.png"
        );
        assert_eq!(
            emoji_url(BACK).unwrap(),
            "https://awayuki.github.io/emoji/mahjong-back.png"
        );
    }

    #[test]
    fn test_point_sticks() {
        assert_eq!(emoji_key(STICK_100).unwrap(), "mahjong_stick100");
        assert_eq!(
            emoji_url(STICK_1000).unwrap(),
            "https://awayuki.github.io/emoji/mahjong-stick1000.png"
        );
    }

    #[test]
    fn test_unknown_codes() {
        for code in ["8z", "0m", "x", "", "1m2m"] {
            assert_eq!(emoji_key(code), Err(HandError::UnknownTile(code.to_string())));
        }
    }
}
