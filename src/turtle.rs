//! Turtle state and operations for 2D line interpretation.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// The canonical draw symbol; aliases are translated onto it.
pub const DRAW_SYMBOL: char = 'F';

/// Snapshot of the turtle taken by a save instruction (`[`).
///
/// The angle increment is part of the frame, so a flip performed inside a branch
/// is undone by the matching restore.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedFrame {
    pub position: DVec2,
    pub angle_increment: f64,
    pub heading: f64,
    pub step_length: f64,
}

/// The state of the drawing turtle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the pen.
    pub position: DVec2,

    /// Direction of travel in radians, kept in `[0, 2π)`.
    pub heading: f64,

    /// Distance covered by one draw instruction (scaled by `@`).
    pub step_length: f64,

    /// Signed turn applied by `+`/`-`; negated by `!`.
    pub angle_increment: f64,

    /// Number of currently open saves.
    pub depth: usize,
}

impl TurtleState {
    /// Creates a turtle at the origin.
    pub fn new(heading: f64, step_length: f64, angle_increment: f64) -> Self {
        Self {
            position: DVec2::ZERO,
            heading: normalize_heading(heading),
            step_length,
            angle_increment,
            depth: 0,
        }
    }

    /// Unit vector pointing along the current heading.
    pub fn direction(&self) -> DVec2 {
        DVec2::from_angle(self.heading)
    }

    /// Rotates the heading by `angle` radians, wrapping into `[0, 2π)`.
    pub fn turn(&mut self, angle: f64) {
        self.heading = normalize_heading(self.heading + angle);
    }

    /// Moves one step forward and returns the position the move started from.
    pub fn advance(&mut self) -> DVec2 {
        let start = self.position;
        self.position += self.direction() * self.step_length;
        start
    }

    pub fn flip(&mut self) {
        self.angle_increment = -self.angle_increment;
    }

    pub fn save(&self) -> SavedFrame {
        SavedFrame {
            position: self.position,
            angle_increment: self.angle_increment,
            heading: self.heading,
            step_length: self.step_length,
        }
    }

    pub fn restore(&mut self, frame: SavedFrame) {
        self.position = frame.position;
        self.angle_increment = frame.angle_increment;
        self.heading = frame.heading;
        self.step_length = frame.step_length;
    }
}

/// Wraps an angle into `[0, 2π)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `TAU`; that case folds to zero.
pub fn normalize_heading(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Operations understood by the turtle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurtleOp {
    /// Emit a segment and move forward (`F`).
    Draw,
    /// Turn by `+angle` (`+`).
    TurnPositive,
    /// Turn by `-angle` (`-`).
    TurnNegative,
    /// Save the turtle state onto the stack (`[`).
    Push,
    /// Restore the most recently saved state (`]`).
    Pop,
    /// Multiply the step length by the literal that follows (`@`).
    Scale,
    /// Negate the angle increment (`!`).
    Flip,
    /// No-op: symbol has no drawing meaning.
    Ignore,
}

impl TurtleOp {
    /// Maps a symbol of the fixed instruction alphabet to its operation.
    pub fn from_symbol(sym: char) -> Self {
        match sym {
            DRAW_SYMBOL => Self::Draw,
            '+' => Self::TurnPositive,
            '-' => Self::TurnNegative,
            '[' => Self::Push,
            ']' => Self::Pop,
            '@' => Self::Scale,
            '!' => Self::Flip,
            _ => Self::Ignore,
        }
    }
}
