//! Command handlers.
//!
//! Each handler receives the `CliContext`, delegates to `AppCore` and
//! renders the result in the requested output format.

pub mod add;
pub mod delete;
pub mod list;
pub mod reference;
pub mod show;
pub mod update;
