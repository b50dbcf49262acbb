//! Tehai - mahjong hand-state codec and call-legality engine
//!
//! This crate keeps a player's hand as one canonical string and provides:
//! - Parsing and writing of that string through a structured [`Hand`]
//! - The call mutations: open meld (furo), added kan (kakan), closed kan (ankan)
//! - Legality queries for self-draw wins and kan declarations
//!
//! # Architecture
//!
//! Every operation is a pure function: a hand goes in by value and a new
//! hand (or a boolean) comes out. Shanten computation and added-kan
//! candidate search sit behind the [`RulesOracle`] trait so the legality
//! queries can be tested against fakes.
//!
//! # Modules
//!
//! - [`tile`]: Tile values, canonical order and tile-string parsing
//! - [`hand`]: Structured hand and the canonical hand string
//! - [`call`]: Call declarations and the hand mutations they perform
//! - [`shanten`]: Shanten numbers for regular, seven-pairs and thirteen-orphans shapes
//! - [`oracle`]: The rules oracle seam and the standard rules
//! - [`engine`]: Legality queries
//! - [`notation`]: The same operations over raw hand strings
//! - [`display`]: Tile artwork lookup

pub mod call;
pub mod display;
pub mod engine;
pub mod error;
pub mod hand;
pub mod notation;
pub mod oracle;
pub mod shanten;
pub mod tile;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use call::Call;
pub use engine::{ankan_candidates, CallEngine};
pub use error::HandError;
pub use hand::{Hand, Meld, MeldKind};
pub use notation::{
    apply_call, can_ankan, can_ankan_with, can_kakan, can_kakan_with, can_tsumo,
    can_tsumo_with, set_ankan, set_furo, set_kakan,
};
pub use oracle::{kakan_candidates, RulesOracle, StandardRules};
pub use tile::{parse_tiles, Suit, Tile, TILE_KINDS};
