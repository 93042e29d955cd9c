//! Solutions for Advent of Code 2025.
//!
//! Every day exposes a `parse` function turning raw input into a typed
//! model, and pure functions computing each part's answer from it.

pub mod d02;
pub mod d04;
pub mod d05;
pub mod d06;
pub mod d07;
mod error;

pub use self::error::Error;
