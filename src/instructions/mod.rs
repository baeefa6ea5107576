//! # Instruction Builders
//!
//! Unsigned instructions for the Hello World program. Callers wrap them
//! into transactions, sign and submit them on their own.

/// `initialize` instruction builder
pub mod initialize;

pub use initialize::create_initialize_instruction;
