//! Proficiency analytics — skill-level statistics for the dashboards.
//!
//! Produces:
//!   1. Per-skill level distribution, average rank and top performers
//!   2. Team strengths per knowledge area
//!   3. Skill gaps (low coverage or low average rank), keyed by skill name
//!   4. Member-vs-team percentile comparison
//!   5. Experts per skill and growth paths per member
//!
//! Every operation is total: unknown members, skills, scales and level
//! labels degrade to documented defaults and never abort the aggregate.
//! Depends on: scale.

use crate::{
    config::AnalyticsConfig,
    model::{Member, Scale, Skill, SkillAssignment},
    scale::ScaleOrderResolver,
    snapshot::Catalog,
    types::{EntityId, Rank},
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// ── Public types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillAnalytics {
    pub skill_id:             EntityId,
    pub skill_name:           String,
    pub scale_id:             EntityId,
    pub total_assigned:       usize,
    pub level_distribution:   Vec<LevelCount>,
    pub average_rank:         f64,
    pub top_performers:       Vec<RankedMember>,
    pub skill_gap_percentage: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LevelCount {
    pub label:      String,
    pub count:      usize,
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedMember {
    pub member_id:   EntityId,
    pub member_name: String,
    pub level_label: String,
    pub rank:        Rank,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamStrength {
    pub knowledge_area_id: EntityId,
    pub knowledge_area:    String,
    /// Members counted as strong in this area.
    pub count:             usize,
    /// `count` over the whole roster, 0–100.
    pub percentage:        u32,
    /// Mean over every assignment seen in the area, strong or not.
    pub average_rank:      f64,
}

/// Coverage record for one skill *name*. Catalog entries sharing a name
/// are reported together; `skill_ids` lists every entry merged in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillGap {
    pub skill_name:   String,
    pub skill_ids:    Vec<EntityId>,
    /// Members holding at least one assignment for the name.
    pub count:        usize,
    pub percentage:   u32,
    pub average_rank: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberComparison {
    pub skill_id:     EntityId,
    pub scale_id:     EntityId,
    pub level_label:  String,
    pub rank:         Rank,
    pub team_average: f64,
    /// Share of the peer population ranked strictly below the member.
    pub percentile:   u32,
    pub population:   usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthStep {
    pub skill_id:      EntityId,
    pub current_level: String,
    pub next_level:    Option<String>,
    pub position:      u32,
}

// ── Analytics ────────────────────────────────────────────────────────────────

pub struct ProficiencyAnalytics {
    config: AnalyticsConfig,
}

impl Default for ProficiencyAnalytics {
    fn default() -> Self {
        Self::new(AnalyticsConfig::default())
    }
}

impl ProficiencyAnalytics {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn analyze_skill(
        &self,
        skill: &Skill,
        scale: &Scale,
        assignments: &[SkillAssignment],
        members: &[Member],
    ) -> SkillAnalytics {
        let held: Vec<&SkillAssignment> =
            assignments.iter().filter(|a| a.skill_id == skill.id).collect();
        let total = held.len();

        let level_distribution = ScaleOrderResolver::sorted_levels(scale)
            .into_iter()
            .map(|label| {
                let count = held
                    .iter()
                    .filter(|a| ScaleOrderResolver::is_level(scale, &a.level_label, &label))
                    .count();
                LevelCount { label, count, percentage: percentage(count, total) }
            })
            .collect();

        let ranks: Vec<Rank> = held
            .iter()
            .map(|a| ScaleOrderResolver::resolve_rank(scale, &a.level_label))
            .collect();
        let average_rank = mean(&ranks);

        // sort_by is stable: equal ranks keep input order.
        let mut ordered: Vec<(&SkillAssignment, Rank)> =
            held.iter().copied().zip(ranks.iter().copied()).collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1));
        let top_performers = ordered
            .into_iter()
            .take(self.config.top_performer_limit)
            .map(|(a, rank)| RankedMember {
                member_id:   a.member_id.clone(),
                member_name: self.member_name(members, &a.member_id),
                level_label: a.level_label.clone(),
                rank,
            })
            .collect();

        let below_average = ranks.iter().filter(|r| (**r as f64) < average_rank).count();

        SkillAnalytics {
            skill_id: skill.id.clone(),
            skill_name: skill.name.clone(),
            scale_id: scale.id.clone(),
            total_assigned: total,
            level_distribution,
            average_rank,
            top_performers,
            skill_gap_percentage: percentage(below_average, total),
        }
    }

    /// One entry per knowledge area with at least one strong member,
    /// ordered by strong-member count, highest first.
    ///
    /// Only the *first* assignment a member holds in an area (in stored
    /// order) decides whether that member is strong there. Later, possibly
    /// higher-ranked, assignments in the same area are not reconsidered.
    pub fn team_strengths(&self, members: &[Member], catalog: &Catalog) -> Vec<TeamStrength> {
        struct AreaTally {
            id:       EntityId,
            name:     String,
            max_rank: Option<Rank>,
            sum:      f64,
            seen:     usize,
            strong:   usize,
        }

        let mut areas: Vec<AreaTally> = Vec::new();
        let mut index: HashMap<EntityId, usize> = HashMap::new();

        // Pass 1: max and mean rank per area across the whole roster.
        for assignment in members.iter().flat_map(|m| &m.skills) {
            let Some(area) = catalog.knowledge_area_of(&assignment.skill_id) else {
                log::debug!(
                    "team_strengths: skill '{}' has no knowledge area, skipped",
                    assignment.skill_id
                );
                continue;
            };
            let rank = rank_of(&catalog.scales, assignment);
            let slot = *index.entry(area.id.clone()).or_insert_with(|| {
                areas.push(AreaTally {
                    id:       area.id.clone(),
                    name:     area.name.clone(),
                    max_rank: None,
                    sum:      0.0,
                    seen:     0,
                    strong:   0,
                });
                areas.len() - 1
            });
            let tally = &mut areas[slot];
            tally.max_rank = Some(tally.max_rank.map_or(rank, |m| m.max(rank)));
            tally.sum += rank as f64;
            tally.seen += 1;
        }

        // Pass 2: first assignment per member per area decides strength.
        for member in members {
            let mut counted: HashSet<usize> = HashSet::new();
            for assignment in &member.skills {
                let Some(area) = catalog.knowledge_area_of(&assignment.skill_id) else {
                    continue;
                };
                let Some(&slot) = index.get(&area.id) else { continue };
                if !counted.insert(slot) {
                    continue;
                }
                let tally = &mut areas[slot];
                let bar = tally.max_rank.unwrap_or(0) as f64 * self.config.strong_rank_ratio;
                if rank_of(&catalog.scales, assignment) as f64 >= bar {
                    tally.strong += 1;
                }
            }
        }

        let mut strengths: Vec<TeamStrength> = areas
            .into_iter()
            .filter(|t| t.strong > 0)
            .map(|t| TeamStrength {
                knowledge_area_id: t.id,
                knowledge_area:    t.name,
                count:             t.strong,
                percentage:        percentage(t.strong, members.len()),
                average_rank:      if t.seen == 0 { 0.0 } else { t.sum / t.seen as f64 },
            })
            .collect();
        strengths.sort_by(|a, b| b.count.cmp(&a.count));
        strengths
    }

    /// Skills whose coverage is below the coverage threshold or whose
    /// average rank is below the rank threshold, least covered first.
    ///
    /// Coverage is keyed by skill name: distinct catalog entries sharing a
    /// name are merged into one record for this report only.
    pub fn skill_gaps(
        &self,
        skills: &[Skill],
        members: &[Member],
        scales: &[Scale],
    ) -> Vec<SkillGap> {
        let mut by_name: Vec<(&str, Vec<&str>)> = Vec::new();
        for skill in skills {
            match by_name.iter_mut().find(|(name, _)| *name == skill.name) {
                Some((_, ids)) => ids.push(&skill.id),
                None => by_name.push((&skill.name, vec![&skill.id])),
            }
        }

        let mut gaps: Vec<SkillGap> = Vec::new();
        for (name, ids) in by_name {
            let mut covered = 0usize;
            let mut ranks: Vec<Rank> = Vec::new();
            for member in members {
                let held: Vec<&SkillAssignment> = member
                    .skills
                    .iter()
                    .filter(|a| ids.contains(&a.skill_id.as_str()))
                    .collect();
                if !held.is_empty() {
                    covered += 1;
                }
                ranks.extend(held.iter().map(|a| rank_of(scales, a)));
            }

            let coverage = percentage(covered, members.len());
            let average_rank = mean(&ranks);

            if (coverage as f64) < self.config.gap_coverage_threshold_pct
                || average_rank < self.config.gap_average_rank_threshold
            {
                gaps.push(SkillGap {
                    skill_name: name.to_string(),
                    skill_ids: ids.into_iter().map(String::from).collect(),
                    count: covered,
                    percentage: coverage,
                    average_rank,
                });
            }
        }

        gaps.sort_by_key(|g| g.percentage);
        gaps
    }

    /// One record per assignment of `member`, highest percentile first.
    /// The peer population is every assignment in `all_members` sharing
    /// the same skill and scale, the member's own included.
    pub fn member_comparison(
        &self,
        member: &Member,
        all_members: &[Member],
        scales: &[Scale],
    ) -> Vec<MemberComparison> {
        let mut records: Vec<MemberComparison> = member
            .skills
            .iter()
            .map(|assignment| {
                let rank = rank_of(scales, assignment);
                let population: Vec<Rank> = all_members
                    .iter()
                    .flat_map(|m| &m.skills)
                    .filter(|a| {
                        a.skill_id == assignment.skill_id && a.scale_id == assignment.scale_id
                    })
                    .map(|a| rank_of(scales, a))
                    .collect();
                let below = population.iter().filter(|r| **r < rank).count();

                MemberComparison {
                    skill_id:     assignment.skill_id.clone(),
                    scale_id:     assignment.scale_id.clone(),
                    level_label:  assignment.level_label.clone(),
                    rank,
                    team_average: mean(&population),
                    percentile:   percentage(below, population.len()),
                    population:   population.len(),
                }
            })
            .collect();

        records.sort_by(|a, b| b.percentile.cmp(&a.percentile));
        records
    }

    /// Members holding `skill` at the top rank of `scale`, in roster order.
    pub fn experts(&self, skill: &Skill, scale: &Scale, members: &[Member]) -> Vec<RankedMember> {
        let top = ScaleOrderResolver::highest_level(scale);
        if top.is_empty() {
            return Vec::new();
        }
        let top_rank = ScaleOrderResolver::resolve_rank(scale, &top);

        members
            .iter()
            .filter_map(|member| {
                member
                    .skills
                    .iter()
                    .filter(|a| a.skill_id == skill.id)
                    .map(|a| (a, ScaleOrderResolver::resolve_rank(scale, &a.level_label)))
                    .find(|(_, rank)| *rank >= top_rank)
                    .map(|(a, rank)| RankedMember {
                        member_id:   member.id.clone(),
                        member_name: member.name.clone(),
                        level_label: a.level_label.clone(),
                        rank,
                    })
            })
            .collect()
    }

    /// Next level to aim for on each of the member's skills.
    /// Assignments on an unknown scale are skipped.
    pub fn growth_path(&self, member: &Member, catalog: &Catalog) -> Vec<GrowthStep> {
        member
            .skills
            .iter()
            .filter_map(|assignment| {
                let scale = catalog.scale(&assignment.scale_id)?;
                let label = &assignment.level_label;
                Some(GrowthStep {
                    skill_id:      assignment.skill_id.clone(),
                    current_level: label.clone(),
                    next_level:    ScaleOrderResolver::next_higher_level(scale, label),
                    position:      ScaleOrderResolver::percentile_position(scale, label),
                })
            })
            .collect()
    }

    fn member_name(&self, members: &[Member], member_id: &str) -> String {
        match members.iter().find(|m| m.id == member_id) {
            Some(m) => m.name.clone(),
            None => {
                log::debug!(
                    "analytics: member '{member_id}' not in roster, using placeholder name"
                );
                self.config.unknown_member_name.clone()
            }
        }
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Rank of an assignment on its own scale; 0 when the scale is unknown.
fn rank_of(scales: &[Scale], assignment: &SkillAssignment) -> Rank {
    match scales.iter().find(|s| s.id == assignment.scale_id) {
        Some(scale) => ScaleOrderResolver::resolve_rank(scale, &assignment.level_label),
        None => {
            log::debug!(
                "analytics: scale '{}' not in catalog, ranking '{}' as 0",
                assignment.scale_id,
                assignment.level_label
            );
            0
        }
    }
}

fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

/// Accumulated in f64: numeric labels may sit anywhere in the i64 range.
fn mean(ranks: &[Rank]) -> f64 {
    if ranks.is_empty() {
        return 0.0;
    }
    ranks.iter().map(|r| *r as f64).sum::<f64>() / ranks.len() as f64
}
