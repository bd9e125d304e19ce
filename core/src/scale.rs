//! Scale ranking — level label → comparable integer rank.
//!
//! RULE: Resolution never fails. A label that is not in the scale
//! catalog (or, on a numeric scale, does not parse) resolves to rank 0,
//! the same as the lowest level. Callers that need to tell the two
//! apart use `RosterSnapshot::validate()`.

use crate::{
    model::{Scale, ScaleKind},
    types::Rank,
};

pub struct ScaleOrderResolver;

impl ScaleOrderResolver {
    /// Rank of `level_label` on `scale`, or 0 when unrecognised.
    pub fn resolve_rank(scale: &Scale, level_label: &str) -> Rank {
        let rank = match &scale.kind {
            ScaleKind::Numeric { .. } => parse_numeric(level_label),
            ScaleKind::Ordinal { levels } => levels
                .iter()
                .find(|l| l.label == level_label)
                .map(|l| l.rank),
        };

        rank.unwrap_or_else(|| {
            log::debug!(
                "scale {}: unrecognised level '{level_label}', ranking as 0",
                scale.id
            );
            0
        })
    }

    /// Positive when `a` outranks `b`, zero when equal.
    /// Saturates at the `Rank` bounds for extreme numeric labels.
    pub fn compare(scale: &Scale, a: &str, b: &str) -> Rank {
        Self::resolve_rank(scale, a).saturating_sub(Self::resolve_rank(scale, b))
    }

    /// Whether `candidate` denotes the catalog level `label`. Numeric scales
    /// compare parsed values, so " 3" and "03" both land on "3". Ordinal
    /// scales compare labels exactly.
    pub fn is_level(scale: &Scale, candidate: &str, label: &str) -> bool {
        match &scale.kind {
            ScaleKind::Numeric { .. } => match (parse_numeric(candidate), parse_numeric(label)) {
                (Some(c), Some(l)) => c == l,
                _ => candidate == label,
            },
            ScaleKind::Ordinal { .. } => candidate == label,
        }
    }

    /// Catalog labels in ascending rank order. Equal ranks keep catalog order.
    pub fn sorted_levels(scale: &Scale) -> Vec<String> {
        let mut ranked: Vec<(Rank, &str)> = scale
            .labels()
            .into_iter()
            .map(|label| (Self::resolve_rank(scale, label), label))
            .collect();
        ranked.sort_by_key(|(rank, _)| *rank);
        ranked.into_iter().map(|(_, label)| label.to_string()).collect()
    }

    /// Top label, or "" for an empty catalog.
    pub fn highest_level(scale: &Scale) -> String {
        Self::sorted_levels(scale).pop().unwrap_or_default()
    }

    /// Bottom label, or "" for an empty catalog.
    pub fn lowest_level(scale: &Scale) -> String {
        Self::sorted_levels(scale).into_iter().next().unwrap_or_default()
    }

    /// The label immediately above `current`. None when `current` is not
    /// in the catalog or is already the top.
    pub fn next_higher_level(scale: &Scale, current: &str) -> Option<String> {
        let sorted = Self::sorted_levels(scale);
        let index = sorted.iter().position(|l| l == current)?;
        sorted.into_iter().nth(index + 1)
    }

    /// Position of `level_label` within the sorted catalog, 0–100.
    pub fn percentile_position(scale: &Scale, level_label: &str) -> u32 {
        let sorted = Self::sorted_levels(scale);
        if sorted.len() <= 1 {
            return 0;
        }
        match sorted.iter().position(|l| l == level_label) {
            Some(index) => {
                let position = index as f64 / (sorted.len() - 1) as f64 * 100.0;
                position.round() as u32
            }
            None => 0,
        }
    }
}

fn parse_numeric(label: &str) -> Option<Rank> {
    label.trim().parse::<Rank>().ok()
}
