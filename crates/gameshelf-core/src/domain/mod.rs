//! Core domain types.
//!
//! These types represent the pure catalog model, independent of any
//! infrastructure concerns (database, terminal, etc.).
//!
//! # Structure
//!
//! - `game` - Game records and their projections (`Game`, `NewGame`,
//!   `GameSummary`, `GameDetail`)
//! - `reference` - Reference data shared by games (`Company`, `Console`, `Genre`)

mod game;
mod reference;

pub use game::{Game, GameDetail, GameSummary, NewGame};
pub use reference::{Company, Console, Genre, ReferenceData};
