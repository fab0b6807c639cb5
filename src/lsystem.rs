//! The end-to-end call: expand, translate, then either return the string or draw it.

use crate::error::Result;
use crate::grammar::{Grammar, translate_aliases};
use crate::interpreter::{TurtleConfig, TurtleInterpreter};
use crate::segment::{Segment, dedup_segments};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

/// A complete L-System request.
///
/// Built with [`LSystem::new`] and the `with_*` builder methods, or deserialized from a
/// config file. Angles are in radians.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LSystem {
    pub axiom: String,
    pub rules: BTreeMap<char, String>,
    pub iterations: usize,
    pub angle_increment: f64,
    pub initial_heading: f64,
    pub step_length: f64,
    /// Symbols drawn exactly like `F`.
    pub aliases: Vec<char>,
    pub extra_info: bool,
    pub deduplicate: bool,
    /// Return the expanded, alias-translated string instead of geometry.
    pub raw: bool,
}

impl Default for LSystem {
    fn default() -> Self {
        Self {
            axiom: String::new(),
            rules: BTreeMap::new(),
            iterations: 1,
            angle_increment: FRAC_PI_2,
            initial_heading: FRAC_PI_2,
            step_length: 1.0,
            aliases: Vec::new(),
            extra_info: false,
            deduplicate: true,
            raw: false,
        }
    }
}

/// Result of [`LSystem::generate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Output {
    /// The expanded, alias-translated symbol string.
    Raw(String),
    /// Segments in traversal order.
    Segments(Vec<Segment>),
}

impl Output {
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Raw(s) => Some(s),
            Self::Segments(_) => None,
        }
    }

    pub fn as_segments(&self) -> Option<&[Segment]> {
        match self {
            Self::Raw(_) => None,
            Self::Segments(s) => Some(s),
        }
    }

    pub fn into_segments(self) -> Option<Vec<Segment>> {
        match self {
            Self::Raw(_) => None,
            Self::Segments(s) => Some(s),
        }
    }
}

impl LSystem {
    pub fn new(axiom: impl Into<String>, iterations: usize, angle_increment: f64) -> Self {
        Self {
            axiom: axiom.into(),
            iterations,
            angle_increment,
            ..Default::default()
        }
    }

    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.rules.insert(symbol, replacement.into());
        self
    }

    pub fn with_initial_heading(mut self, heading: f64) -> Self {
        self.initial_heading = heading;
        self
    }

    pub fn with_step_length(mut self, step_length: f64) -> Self {
        self.step_length = step_length;
        self
    }

    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = char>) -> Self {
        self.aliases = aliases.into_iter().collect();
        self
    }

    pub fn with_extra_info(mut self, extra_info: bool) -> Self {
        self.extra_info = extra_info;
        self
    }

    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    /// The turtle settings carried by this request.
    pub fn turtle_config(&self) -> TurtleConfig {
        TurtleConfig {
            angle_increment: self.angle_increment,
            initial_heading: self.initial_heading,
            step_length: self.step_length,
            extra_info: self.extra_info,
        }
    }

    /// Expands the grammar and returns the raw string or the drawn segments.
    ///
    /// With `raw` set the turtle is never run and every drawing flag is ignored.
    /// Otherwise segments are deduplicated unless `deduplicate` is off.
    pub fn generate(&self) -> Result<Output> {
        let grammar = Grammar::new(self.axiom.as_str(), self.rules.clone(), self.iterations)?;
        let expanded = grammar.expand();
        let translated = translate_aliases(&expanded, &self.aliases);

        if self.raw {
            return Ok(Output::Raw(translated));
        }

        let mut segments = TurtleInterpreter::new(self.turtle_config()).interpret(&translated)?;
        if self.deduplicate {
            let before = segments.len();
            segments = dedup_segments(segments);
            debug!(
                removed = before - segments.len(),
                kept = segments.len(),
                "deduplicated segments"
            );
        }
        Ok(Output::Segments(segments))
    }
}
