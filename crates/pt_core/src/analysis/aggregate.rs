//! Generic frequency aggregation over pitch partitions.
//!
//! One tally type serves every partition the insight screens used to compute
//! by hand: pitch-type mix, per-count mix, result mix, situational subsets
//! and any derived key a caller can express as a closure. Pure functions, no
//! side effects.

use serde::{Deserialize, Serialize};

use crate::models::PitchEvent;

/// Round `part / whole` to the nearest integer percentage.
///
/// Each category rounds independently; a partition's percentages therefore
/// may not sum to exactly 100. Downstream thresholds were tuned against this
/// behavior, so it is intentional.
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        ((part as f64 / whole as f64) * 100.0).round() as u32
    }
}

/// One category's observation count within a partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// One category's rounded percentage share within a partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub percentage: u32,
}

/// The most frequent category of a partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dominant {
    pub category: String,
    pub count: usize,
    pub percentage: u32,
}

/// Frequency tally for one partition of pitch events.
///
/// Categories are kept in first-encountered order, which makes
/// dominant-category tie-breaking deterministic: on equal counts the
/// earliest-seen category wins. Categories with zero observations never
/// appear. An empty tally (`has_data() == false`) is the explicit "no data"
/// result, distinct from any populated one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionTally {
    categories: Vec<CategoryCount>,
    total: usize,
}

impl PartitionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally events by a derived key. Events for which `key` returns `None`
    /// (malformed or out of partition) are skipped entirely.
    pub fn from_events<'a, I, F>(events: I, key: F) -> Self
    where
        I: IntoIterator<Item = &'a PitchEvent>,
        F: Fn(&PitchEvent) -> Option<String>,
    {
        let mut tally = Self::new();
        for event in events {
            if let Some(category) = key(event) {
                tally.record(category);
            }
        }
        tally
    }

    pub fn record(&mut self, category: String) {
        match self.categories.iter_mut().find(|c| c.category == category) {
            Some(entry) => entry.count += 1,
            None => self.categories.push(CategoryCount { category, count: 1 }),
        }
        self.total += 1;
    }

    /// Fold another tally into this one. Existing categories keep their
    /// position; new ones append in the other tally's order.
    pub fn merge(&mut self, other: &PartitionTally) {
        for entry in &other.categories {
            match self.categories.iter_mut().find(|c| c.category == entry.category) {
                Some(existing) => existing.count += entry.count,
                None => self.categories.push(entry.clone()),
            }
        }
        self.total += other.total;
    }

    pub fn has_data(&self) -> bool {
        self.total > 0
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, category: &str) -> usize {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    pub fn categories(&self) -> &[CategoryCount] {
        &self.categories
    }

    /// Rounded percentage share of one category (0 when absent or empty).
    pub fn share(&self, category: &str) -> u32 {
        percent(self.count(category), self.total)
    }

    /// Independently rounded percentage per category, in first-encountered
    /// order. See [`percent`] for why the sum may drift from 100.
    pub fn percentages(&self) -> Vec<CategoryShare> {
        self.categories
            .iter()
            .map(|c| CategoryShare {
                category: c.category.clone(),
                percentage: percent(c.count, self.total),
            })
            .collect()
    }

    /// Highest-count category, ties broken by first-encountered order.
    /// `None` only when the tally is empty.
    pub fn dominant(&self) -> Option<Dominant> {
        let mut best: Option<&CategoryCount> = None;
        for entry in &self.categories {
            // Strictly greater keeps the earliest entry on ties.
            if best.map(|b| entry.count > b.count).unwrap_or(true) {
                best = Some(entry);
            }
        }
        best.map(|entry| Dominant {
            category: entry.category.clone(),
            count: entry.count,
            percentage: percent(entry.count, self.total),
        })
    }
}
