//! Grammar expansion and alias translation.

use crate::error::{LSystemError, Result};
use crate::turtle::DRAW_SYMBOL;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// An L-System grammar: an axiom, its production rules, and how many generations to derive.
///
/// Constructed once per call through [`Grammar::new`], which enforces the argument
/// invariants; the fields are read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Grammar {
    axiom: String,
    rules: BTreeMap<char, String>,
    iterations: usize,
}

impl Grammar {
    /// Builds a grammar.
    ///
    /// Fails with [`LSystemError::InvalidArgument`] when `iterations` is zero or the
    /// axiom is empty.
    pub fn new(
        axiom: impl Into<String>,
        rules: BTreeMap<char, String>,
        iterations: usize,
    ) -> Result<Self> {
        let axiom = axiom.into();
        if iterations < 1 {
            return Err(LSystemError::InvalidArgument(format!(
                "iteration count must be at least 1, got {iterations}"
            )));
        }
        if axiom.is_empty() {
            return Err(LSystemError::InvalidArgument(
                "axiom must not be empty".to_string(),
            ));
        }
        Ok(Self {
            axiom,
            rules,
            iterations,
        })
    }

    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    pub fn rules(&self) -> &BTreeMap<char, String> {
        &self.rules
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Derives the final string by rewriting the axiom `iterations` times.
    ///
    /// Each generation reads the previous generation as a whole and writes a new
    /// string: every symbol with a rule is replaced, every other symbol is copied.
    /// Replacement text is never matched again within the same generation.
    pub fn expand(&self) -> String {
        let mut current = self.axiom.clone();
        for generation in 1..=self.iterations {
            current = self.rewrite(&current);
            trace!(generation, len = current.len(), "expanded generation");
        }
        debug!(
            iterations = self.iterations,
            len = current.len(),
            "grammar expansion complete"
        );
        current
    }

    fn rewrite(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        for sym in input.chars() {
            match self.rules.get(&sym) {
                Some(replacement) => output.push_str(replacement),
                None => output.push(sym),
            }
        }
        output
    }
}

/// Replaces every occurrence of an alias symbol with the canonical draw symbol (`F`).
///
/// All other characters pass through untouched. An empty alias set returns the
/// stream unchanged.
pub fn translate_aliases(stream: &str, aliases: &[char]) -> String {
    if aliases.is_empty() {
        return stream.to_string();
    }
    stream
        .chars()
        .map(|c| if aliases.contains(&c) { DRAW_SYMBOL } else { c })
        .collect()
}
