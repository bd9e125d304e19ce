//! Dashboard payload composition.
//!
//! Runs the proficiency and engagement computations over one snapshot
//! and bundles the results into serializable payloads. Nothing here is
//! persisted; every call recomputes from the snapshot it is given.

use crate::{
    config::AnalyticsConfig,
    engagement::{AvailabilitySummary, EngagementResolver, MemberEngagement},
    proficiency::{
        GrowthStep, MemberComparison, ProficiencyAnalytics, SkillAnalytics, SkillGap, TeamStrength,
    },
    snapshot::RosterSnapshot,
    types::EntityId,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeskOverview {
    pub as_of:          NaiveDate,
    pub member_count:   usize,
    pub skills:         Vec<SkillAnalytics>,
    pub team_strengths: Vec<TeamStrength>,
    pub skill_gaps:     Vec<SkillGap>,
    pub availability:   AvailabilitySummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberProfile {
    pub member_id:   EntityId,
    pub member_name: String,
    pub engagement:  MemberEngagement,
    pub comparison:  Vec<MemberComparison>,
    pub growth_path: Vec<GrowthStep>,
}

pub fn build_overview(
    snapshot: &RosterSnapshot,
    config: &AnalyticsConfig,
    now: NaiveDate,
) -> DeskOverview {
    let catalog = &snapshot.catalog;
    let analytics = ProficiencyAnalytics::new(config.clone());

    let assignments: Vec<_> = snapshot
        .members
        .iter()
        .flat_map(|m| m.skills.iter().cloned())
        .collect();

    let skills = catalog
        .skills
        .iter()
        .filter_map(|skill| match catalog.scale_for_skill(&skill.id) {
            Some(scale) => {
                Some(analytics.analyze_skill(skill, scale, &assignments, &snapshot.members))
            }
            None => {
                log::debug!("dashboard: skill '{}' has no resolvable scale, skipped", skill.id);
                None
            }
        })
        .collect();

    let team_strengths = analytics.team_strengths(&snapshot.members, catalog);
    let skill_gaps = analytics.skill_gaps(&catalog.skills, &snapshot.members, &catalog.scales);

    let resolver = EngagementResolver::new(&catalog.clients, &config.sentinel_client_name);
    let availability = resolver.availability(&snapshot.members, now);

    let overview = DeskOverview {
        as_of: now,
        member_count: snapshot.members.len(),
        skills,
        team_strengths,
        skill_gaps,
        availability,
    };

    log::info!(
        "dashboard: as_of={now} members={} skills={} strengths={} gaps={} engaged={}/{}",
        overview.member_count,
        overview.skills.len(),
        overview.team_strengths.len(),
        overview.skill_gaps.len(),
        overview.availability.engaged,
        overview.availability.total,
    );

    overview
}

/// None when `member_id` is not in the roster.
pub fn build_member_profile(
    snapshot: &RosterSnapshot,
    member_id: &str,
    config: &AnalyticsConfig,
    now: NaiveDate,
) -> Option<MemberProfile> {
    let member = snapshot.member(member_id)?;
    let catalog = &snapshot.catalog;
    let analytics = ProficiencyAnalytics::new(config.clone());
    let resolver = EngagementResolver::new(&catalog.clients, &config.sentinel_client_name);

    Some(MemberProfile {
        member_id:   member.id.clone(),
        member_name: member.name.clone(),
        engagement:  resolver.member_engagement(member, now),
        comparison:  analytics.member_comparison(member, &snapshot.members, &catalog.scales),
        growth_path: analytics.growth_path(member, catalog),
    })
}
