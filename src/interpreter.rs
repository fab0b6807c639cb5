//! Interpreter that converts a translated L-System symbol stream into line [`Segment`]s.
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a [`TurtleConfig`], then
//! call [`TurtleInterpreter::interpret`] on the expanded (and alias-translated) string.

use crate::error::{LSystemError, Result};
use crate::segment::{Segment, SegmentInfo};
use crate::turtle::{DRAW_SYMBOL, SavedFrame, TurtleOp, TurtleState};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

/// Configuration for turtle interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurtleConfig {
    /// Turn applied by `+`/`-`, in radians.
    pub angle_increment: f64,
    /// Heading the turtle starts with, in radians. Default: π/2 (pointing up).
    pub initial_heading: f64,
    /// Length of one draw before any `@` scaling.
    pub step_length: f64,
    /// Attach step length, heading, and stack depth to every emitted segment.
    pub extra_info: bool,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            angle_increment: FRAC_PI_2,
            initial_heading: FRAC_PI_2,
            step_length: 1.0,
            extra_info: false,
        }
    }
}

/// Interprets a symbol stream with a 2D turtle.
#[derive(Clone, Debug, Default)]
pub struct TurtleInterpreter {
    config: TurtleConfig,
}

impl TurtleInterpreter {
    pub fn new(config: TurtleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Walks `stream` once, left to right, and returns the segments drawn.
    ///
    /// The turtle starts at the origin with the configured heading and step length.
    /// Symbols outside the instruction alphabet are ignored.
    ///
    /// # Push / Pop
    ///
    /// `[` saves position, heading, step length, and angle increment; `]` restores them.
    /// The stack grows as needed. A `]` with nothing to restore is an error.
    ///
    /// # Scale
    ///
    /// `@` must be immediately followed by a decimal literal (`@2`, `@0.5`, `@.75`).
    /// The literal's characters are consumed and not dispatched as instructions.
    ///
    /// # Errors
    ///
    /// - [`LSystemError::EmptyGeometry`] if `stream` contains no `F`.
    /// - [`LSystemError::MissingArgument`] for an `@` without a literal.
    /// - [`LSystemError::StackUnderflow`] for an unmatched `]`.
    pub fn interpret(&self, stream: &str) -> Result<Vec<Segment>> {
        if !stream.contains(DRAW_SYMBOL) {
            return Err(LSystemError::EmptyGeometry);
        }

        let symbols: Vec<char> = stream.chars().collect();
        let mut turtle = TurtleState::new(
            self.config.initial_heading,
            self.config.step_length,
            self.config.angle_increment,
        );
        let mut stack: Vec<SavedFrame> = Vec::new();
        let mut segments = Vec::new();

        let mut i = 0;
        while i < symbols.len() {
            match TurtleOp::from_symbol(symbols[i]) {
                TurtleOp::Draw => {
                    let start = turtle.advance();
                    let mut segment = Segment::new(start, turtle.position);
                    if self.config.extra_info {
                        segment = segment.with_info(SegmentInfo {
                            length: turtle.step_length,
                            heading: turtle.heading,
                            depth: turtle.depth,
                        });
                    }
                    segments.push(segment);
                }
                TurtleOp::TurnPositive => turtle.turn(turtle.angle_increment),
                TurtleOp::TurnNegative => turtle.turn(-turtle.angle_increment),
                TurtleOp::Push => {
                    stack.push(turtle.save());
                    turtle.depth += 1;
                }
                TurtleOp::Pop => {
                    let frame = stack
                        .pop()
                        .ok_or(LSystemError::StackUnderflow { position: i })?;
                    turtle.restore(frame);
                    turtle.depth -= 1;
                }
                TurtleOp::Scale => {
                    let (factor, consumed) = scan_number(&symbols, i + 1)
                        .ok_or(LSystemError::MissingArgument { position: i })?;
                    turtle.step_length *= factor;
                    i += consumed;
                }
                TurtleOp::Flip => turtle.flip(),
                TurtleOp::Ignore => {}
            }
            i += 1;
        }

        debug!(
            symbols = symbols.len(),
            segments = segments.len(),
            open_saves = stack.len(),
            "turtle interpretation complete"
        );
        Ok(segments)
    }
}

/// Reads the numeric literal starting at `start`.
///
/// Matches the longest run of ASCII digits containing at most one `.`, and returns the
/// parsed value with the number of chars consumed. `None` if nothing parseable follows.
pub fn scan_number(symbols: &[char], start: usize) -> Option<(f64, usize)> {
    let rest = symbols.get(start..)?;
    let mut seen_point = false;
    let len = rest
        .iter()
        .take_while(|&&c| match c {
            '0'..='9' => true,
            '.' if !seen_point => {
                seen_point = true;
                true
            }
            _ => false,
        })
        .count();
    if len == 0 {
        return None;
    }
    let literal: String = rest[..len].iter().collect();
    literal.parse::<f64>().ok().map(|value| (value, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn scans_integer_and_decimal_literals() {
        assert_eq!(scan_number(&chars("@2F"), 1), Some((2.0, 1)));
        assert_eq!(scan_number(&chars("@0.5F"), 1), Some((0.5, 3)));
        assert_eq!(scan_number(&chars("@.25"), 1), Some((0.25, 3)));
        assert_eq!(scan_number(&chars("@12."), 1), Some((12.0, 3)));
    }

    #[test]
    fn scan_stops_at_second_point() {
        assert_eq!(scan_number(&chars("1.5.2"), 0), Some((1.5, 3)));
    }

    #[test]
    fn scan_without_digits_is_no_match() {
        assert_eq!(scan_number(&chars("@F"), 1), None);
        assert_eq!(scan_number(&chars("@"), 1), None);
        assert_eq!(scan_number(&chars("@.F"), 1), None);
        assert_eq!(scan_number(&chars("@"), 5), None);
    }

    #[test]
    fn scale_digits_are_not_dispatched() {
        // "@2" followed by "F": the digit must not be treated as a symbol of its own,
        // and "@1.5" must consume the point too.
        let interp = TurtleInterpreter::new(TurtleConfig {
            initial_heading: 0.0,
            ..Default::default()
        });
        let segments = interp.interpret("@1.5F").unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].x1(), 1.5);
    }

    #[test]
    fn depth_tracks_open_saves() {
        let interp = TurtleInterpreter::new(TurtleConfig {
            extra_info: true,
            ..Default::default()
        });
        let depths: Vec<usize> = interp
            .interpret("F[F[F]F]F")
            .unwrap()
            .iter()
            .map(|s| s.info.unwrap().depth)
            .collect();
        assert_eq!(depths, vec![0, 1, 2, 1, 0]);
    }

    #[test]
    fn errors_report_offending_position() {
        let interp = TurtleInterpreter::default();
        assert_eq!(
            interp.interpret("FF]").unwrap_err(),
            LSystemError::StackUnderflow { position: 2 }
        );
        assert_eq!(
            interp.interpret("F@x").unwrap_err(),
            LSystemError::MissingArgument { position: 1 }
        );
        assert_eq!(
            interp.interpret("+-[]").unwrap_err(),
            LSystemError::EmptyGeometry
        );
    }
}
