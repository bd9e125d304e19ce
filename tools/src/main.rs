//! desk-report: headless dashboard runner for talentdesk.
//!
//! Usage:
//!   desk-report --seed 12345 --members 40
//!   desk-report --snapshot roster.json --config analytics.json --as-of 2024-03-31 --json
//!   desk-report --snapshot roster.json --member member-007

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::env;
use talentdesk_core::{
    config::AnalyticsConfig,
    dashboard::{self, DeskOverview, MemberProfile},
    roster_generator::RosterGenerator,
    snapshot::RosterSnapshot,
};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let member_count = parse_arg(&args, "--members", 40usize);
    let json = args.iter().any(|a| a == "--json");
    let snapshot_path = flag_value(&args, "--snapshot");
    let config_path = flag_value(&args, "--config");
    let member_id = flag_value(&args, "--member");

    let as_of = match flag_value(&args, "--as-of") {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("--as-of expects YYYY-MM-DD, got '{raw}'"))?,
        None => chrono::Local::now().date_naive(),
    };

    let config = match config_path {
        Some(path) => AnalyticsConfig::load(path)?,
        None => AnalyticsConfig::default(),
    };

    let snapshot = match snapshot_path {
        Some(path) => RosterSnapshot::load(path)?,
        None => {
            log::info!(
                "no --snapshot given, generating roster (seed={seed}, members={member_count})"
            );
            RosterGenerator::new(seed, member_count, as_of).generate()
        }
    };

    for warning in snapshot.validate() {
        log::warn!("snapshot: {}: {}", warning.entity_id, warning.message);
    }

    if let Some(member_id) = member_id {
        let profile = dashboard::build_member_profile(&snapshot, member_id, &config, as_of)
            .with_context(|| format!("member '{member_id}' not found in snapshot"))?;
        if json {
            println!("{}", serde_json::to_string_pretty(&profile)?);
        } else {
            print_profile(&profile);
        }
        return Ok(());
    }

    let overview = dashboard::build_overview(&snapshot, &config, as_of);
    if json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
    } else {
        print_overview(&overview);
    }

    Ok(())
}

fn print_overview(overview: &DeskOverview) {
    let availability = &overview.availability;

    println!("=== DESK OVERVIEW ===");
    println!("  as of:      {}", overview.as_of);
    println!("  members:    {}", overview.member_count);
    println!("  engaged:    {}", availability.engaged);
    println!("  available:  {}", availability.available);

    println!();
    println!("=== HEADCOUNT BY CLIENT ===");
    for row in &availability.by_client {
        println!("  {:<32} {:>4}", row.client.name, row.headcount);
    }

    println!();
    println!("=== SKILLS ===");
    for skill in &overview.skills {
        let top = skill
            .top_performers
            .first()
            .map(|p| format!("{} ({})", p.member_name, p.level_label))
            .unwrap_or_else(|| "-".into());
        println!(
            "  {:<26} held by {:>3} | avg rank {:.2} | below avg {:>3}% | top: {}",
            skill.skill_name,
            skill.total_assigned,
            skill.average_rank,
            skill.skill_gap_percentage,
            top
        );
    }

    println!();
    println!("=== TEAM STRENGTHS ===");
    if overview.team_strengths.is_empty() {
        println!("  (none)");
    }
    for strength in &overview.team_strengths {
        println!(
            "  {:<20} strong {:>3} ({:>3}%) | avg rank {:.2}",
            strength.knowledge_area, strength.count, strength.percentage, strength.average_rank
        );
    }

    println!();
    println!("=== SKILL GAPS ===");
    if overview.skill_gaps.is_empty() {
        println!("  (none)");
    }
    for gap in &overview.skill_gaps {
        println!(
            "  {:<26} coverage {:>3}% ({} members) | avg rank {:.2}",
            gap.skill_name, gap.percentage, gap.count, gap.average_rank
        );
    }
}

fn print_profile(profile: &MemberProfile) {
    println!("=== {} ({}) ===", profile.member_name, profile.member_id);
    println!(
        "  current client: {} [{:?}]",
        profile.engagement.client.name, profile.engagement.status
    );

    println!();
    for record in &profile.comparison {
        let next = profile
            .growth_path
            .iter()
            .find(|step| step.skill_id == record.skill_id)
            .and_then(|step| step.next_level.clone())
            .unwrap_or_else(|| "-".into());
        println!(
            "  {:<18} {:<14} pct {:>3} | team avg {:.2} | next: {}",
            record.skill_id, record.level_label, record.percentile, record.team_average, next
        );
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
