//! gcs - Genesys Character Sheet
//!
//! Derives playable character sheets from a setting's archetypes, skills and
//! talents plus a player-authored character file. The derivation itself lives
//! in [`genesys`] and is pure; [`setting`] loads YAML data and [`cli`] wraps it
//! all in the `gcs` binary.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod genesys;
pub mod setting;
pub mod test_utils;

pub use error::{GcsError, Result};
