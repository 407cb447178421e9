//! Rules engine for a tile-placement word game: board geometry, tile
//! bookkeeping, move validation and scoring, and a turn-loop [`game::Game`].
//! Moves are validated by simulation and committed only once fully proven,
//! so a rejected move never leaves partial state behind.

pub mod bag;
pub mod board;
pub mod error;
pub mod game;
pub mod judge;
pub mod moves;
pub mod player;
pub mod rack;
pub mod rules;
pub mod square;
pub mod tile;
pub mod word;
