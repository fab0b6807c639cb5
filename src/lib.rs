//! # lsystem-turtle
//!
//! Expands L-System grammars and interprets the result with a 2D turtle, producing
//! line-segment geometry that any renderer can draw.
//!
//! The pipeline is [`Grammar::expand`] → [`translate_aliases`] →
//! [`TurtleInterpreter::interpret`] → [`dedup_segments`], wrapped end to end by
//! [`LSystem::generate`].
//!
//! | Symbol | Meaning |
//! |---|---|
//! | `F` | draw one step |
//! | `+` / `-` | turn by `+angle` / `-angle` |
//! | `[` / `]` | save / restore turtle state |
//! | `@n` | multiply step length by the literal `n` |
//! | `!` | negate the turn angle |
//!
//! Every other symbol is ignored by the turtle.

pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod lsystem;
pub mod presets;
pub mod segment;
pub mod turtle;

pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use lsystem::*;
pub use presets::*;
pub use segment::*;
pub use turtle::*;
