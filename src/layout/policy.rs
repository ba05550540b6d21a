//! Column layout policy.
//!
//! A [`PolicyTable`] maps a column count to a [`ColumnPolicy`], with an
//! explicit default for every count not special-cased. New table shapes
//! are added here without touching the layout builder.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Alignment;

/// Width and alignment policy for one table shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnPolicy {
    /// Relative column width ratios; `None` lets the renderer auto-size
    pub widths: Option<Vec<f32>>,

    /// Per-column alignment; columns beyond the list fall back to left
    pub alignments: Vec<Alignment>,
}

impl ColumnPolicy {
    /// Create a policy with explicit widths and alignments.
    pub fn new(widths: Option<Vec<f32>>, alignments: Vec<Alignment>) -> Self {
        Self { widths, alignments }
    }

    /// Alignment for a column index, defaulting to left beyond the list.
    pub fn alignment(&self, column: usize) -> Alignment {
        self.alignments.get(column).copied().unwrap_or(Alignment::Left)
    }
}

/// Lookup table from column count to policy.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    entries: HashMap<usize, ColumnPolicy>,
    fallback: ColumnPolicy,
}

impl PolicyTable {
    /// Create an empty table: every column count gets the auto-width,
    /// all-left default.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            fallback: ColumnPolicy::default(),
        }
    }

    /// The standard policy set.
    ///
    /// Three-column tables (keyword / example / meaning) get a narrow
    /// centered first and last column around a wide left-aligned middle;
    /// everything else uses the default.
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.insert(
            3,
            ColumnPolicy::new(
                Some(vec![1.0, 2.5, 1.0]),
                vec![Alignment::Center, Alignment::Left, Alignment::Center],
            ),
        );
        table
    }

    /// Register or replace the policy for a column count.
    pub fn insert(&mut self, columns: usize, policy: ColumnPolicy) {
        self.entries.insert(columns, policy);
    }

    /// Look up the policy for a column count.
    pub fn policy_for(&self, columns: usize) -> &ColumnPolicy {
        self.entries.get(&columns).unwrap_or(&self.fallback)
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::standard()
    }
}
