//! Roster snapshot — the complete read-only input to a dashboard run.
//!
//! A snapshot pairs the reference catalog (scales, categories, knowledge
//! areas, skills, clients) with the member roster. It is loaded once,
//! never mutated, and may be shared across threads freely.

use crate::{
    error::{DeskError, DeskResult},
    model::{Category, Client, KnowledgeArea, Member, Scale, ScaleKind, Skill},
    scale::ScaleOrderResolver,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Catalog {
    pub scales:          Vec<Scale>,
    pub categories:      Vec<Category>,
    pub knowledge_areas: Vec<KnowledgeArea>,
    pub skills:          Vec<Skill>,
    pub clients:         Vec<Client>,
}

impl Catalog {
    pub fn scale(&self, id: &str) -> Option<&Scale> {
        self.scales.iter().find(|s| s.id == id)
    }

    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn knowledge_area_of(&self, skill_id: &str) -> Option<&KnowledgeArea> {
        let skill = self.skill(skill_id)?;
        self.knowledge_areas
            .iter()
            .find(|ka| ka.id == skill.knowledge_area_id)
    }

    /// skill → category → scale.
    pub fn scale_for_skill(&self, skill_id: &str) -> Option<&Scale> {
        let skill = self.skill(skill_id)?;
        let category = self.category(&skill.category_id)?;
        self.scale(&category.scale_id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RosterSnapshot {
    pub catalog: Catalog,
    pub members: Vec<Member>,
}

/// A data-quality finding. Never blocks a computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotWarning {
    pub entity_id: String,
    pub message:   String,
}

impl RosterSnapshot {
    pub fn load(path: &str) -> DeskResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DeskError::Io {
            path: path.into(),
            source,
        })?;
        let snapshot = Self::from_json(&content)?;
        log::info!(
            "snapshot: loaded {path} ({} members, {} skills, {} clients)",
            snapshot.members.len(),
            snapshot.catalog.skills.len(),
            snapshot.catalog.clients.len(),
        );
        Ok(snapshot)
    }

    pub fn from_json(content: &str) -> DeskResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> DeskResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Report data the core will silently degrade on: unknown labels,
    /// unparseable numeric levels, and dangling references.
    pub fn validate(&self) -> Vec<SnapshotWarning> {
        let mut warnings = Vec::new();
        let catalog = &self.catalog;

        for scale in &catalog.scales {
            if let ScaleKind::Numeric { levels } = &scale.kind {
                for label in levels.iter().filter(|l| l.trim().parse::<i64>().is_err()) {
                    warnings.push(warn(
                        &scale.id,
                        format!("numeric level '{label}' does not parse"),
                    ));
                }
            }
        }

        for category in &catalog.categories {
            if catalog.scale(&category.scale_id).is_none() {
                warnings.push(warn(
                    &category.id,
                    format!("category references unknown scale '{}'", category.scale_id),
                ));
            }
        }

        for member in &self.members {
            for assignment in &member.skills {
                if catalog.skill(&assignment.skill_id).is_none() {
                    warnings.push(warn(
                        &member.id,
                        format!("assignment references unknown skill '{}'", assignment.skill_id),
                    ));
                }
                if assignment.member_id != member.id {
                    warnings.push(warn(
                        &member.id,
                        format!("assignment is owned by '{}'", assignment.member_id),
                    ));
                }
                match catalog.scale(&assignment.scale_id) {
                    None => warnings.push(warn(
                        &member.id,
                        format!("assignment references unknown scale '{}'", assignment.scale_id),
                    )),
                    Some(scale) => {
                        let known = ScaleOrderResolver::sorted_levels(scale)
                            .iter()
                            .any(|l| {
                                ScaleOrderResolver::is_level(scale, &assignment.level_label, l)
                            });
                        if !known {
                            warnings.push(warn(
                                &member.id,
                                format!(
                                    "level '{}' is not on scale '{}'",
                                    assignment.level_label, scale.id
                                ),
                            ));
                        }
                    }
                }
            }

            for period in &member.engagements {
                if period.member_id != member.id {
                    warnings.push(warn(
                        &member.id,
                        format!("engagement is owned by '{}'", period.member_id),
                    ));
                }
                if catalog.client(&period.client_id).is_none() {
                    warnings.push(warn(
                        &member.id,
                        format!("engagement references unknown client '{}'", period.client_id),
                    ));
                }
                if let Some(end) = period.end_date {
                    if end < period.start_date {
                        warnings.push(warn(
                            &member.id,
                            format!(
                                "engagement with '{}' ends {end} before it starts {}",
                                period.client_id, period.start_date
                            ),
                        ));
                    }
                }
            }
        }

        warnings
    }
}

fn warn(entity_id: &str, message: String) -> SnapshotWarning {
    SnapshotWarning { entity_id: entity_id.into(), message }
}
