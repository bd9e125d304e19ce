//! Roster and catalog records handed to the core by upstream collaborators.
//!
//! RULE: Nothing here is mutated by the core. Every computation reads a
//! snapshot of these records and allocates fresh output.

use crate::types::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Scales ───────────────────────────────────────────────────────────────────

/// A named ranking system used to compare proficiency levels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scale {
    pub id:   EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub kind: ScaleKind,
}

/// Ordinal scales carry explicit `(label, rank)` pairs.
/// Numeric scales carry labels whose integer value is the rank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScaleKind {
    Ordinal { levels: Vec<ScaleLevel> },
    Numeric { levels: Vec<String> },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScaleLevel {
    pub label: String,
    pub rank:  i64,
}

impl Scale {
    pub fn ordinal(id: &str, levels: &[(&str, i64)]) -> Self {
        Self {
            id:   id.into(),
            name: id.into(),
            kind: ScaleKind::Ordinal {
                levels: levels
                    .iter()
                    .map(|(label, rank)| ScaleLevel { label: (*label).into(), rank: *rank })
                    .collect(),
            },
        }
    }

    pub fn numeric(id: &str, levels: &[&str]) -> Self {
        Self {
            id:   id.into(),
            name: id.into(),
            kind: ScaleKind::Numeric {
                levels: levels.iter().map(|l| (*l).into()).collect(),
            },
        }
    }

    /// Catalog labels in stored order.
    pub fn labels(&self) -> Vec<&str> {
        match &self.kind {
            ScaleKind::Ordinal { levels } => levels.iter().map(|l| l.label.as_str()).collect(),
            ScaleKind::Numeric { levels } => levels.iter().map(String::as_str).collect(),
        }
    }
}

// ── Skills ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id:       EntityId,
    pub name:     String,
    pub scale_id: EntityId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeArea {
    pub id:   EntityId,
    pub name: String,
}

/// A skill inherits its scale through its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub id:                EntityId,
    pub name:              String,
    pub category_id:       EntityId,
    pub knowledge_area_id: EntityId,
}

// ── Members ──────────────────────────────────────────────────────────────────

/// One member holding one skill at one level.
/// `level_label` is free-form and may be absent from the scale catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillAssignment {
    pub member_id:   EntityId,
    pub skill_id:    EntityId,
    pub scale_id:    EntityId,
    pub level_label: String,
}

/// `end_date == None` means the engagement is ongoing.
/// Periods for one member may overlap and arrive in any order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngagementPeriod {
    pub member_id:  EntityId,
    pub client_id:  EntityId,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date:   Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id:          EntityId,
    pub name:        String,
    #[serde(default)]
    pub skills:      Vec<SkillAssignment>,
    #[serde(default)]
    pub engagements: Vec<EngagementPeriod>,
}

impl Member {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id:          id.into(),
            name:        name.into(),
            skills:      Vec::new(),
            engagements: Vec::new(),
        }
    }

    /// Append a skill assignment owned by this member.
    pub fn with_skill(mut self, skill_id: &str, scale_id: &str, level_label: &str) -> Self {
        self.skills.push(SkillAssignment {
            member_id:   self.id.clone(),
            skill_id:    skill_id.into(),
            scale_id:    scale_id.into(),
            level_label: level_label.into(),
        });
        self
    }

    /// Append an engagement period owned by this member.
    pub fn with_engagement(
        mut self,
        client_id: &str,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Self {
        self.engagements.push(EngagementPeriod {
            member_id: self.id.clone(),
            client_id: client_id.into(),
            start_date,
            end_date,
        });
        self
    }
}

// ── Clients ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Client {
    pub id:   EntityId,
    pub name: String,
}

impl Client {
    pub fn new(id: &str, name: &str) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}
