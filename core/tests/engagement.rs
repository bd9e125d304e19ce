use chrono::NaiveDate;
use talentdesk_core::{
    engagement::{EngagementResolver, EngagementStatus, PLACEHOLDER_POOL_ID},
    model::{Client, EngagementPeriod, Member},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn clients() -> Vec<Client> {
    vec![
        Client::new("acme", "Acme Corp"),
        Client::new("pool", "Talent Pool"),
        Client::new("globex", "Globex"),
        Client::new("initech", "Initech"),
    ]
}

fn period(client_id: &str, start: NaiveDate, end: Option<NaiveDate>) -> EngagementPeriod {
    EngagementPeriod {
        member_id: "m1".into(),
        client_id: client_id.into(),
        start_date: start,
        end_date: end,
    }
}

fn now() -> NaiveDate {
    date(2024, 1, 15)
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ── Sentinel resolution ──────────────────────────────────────────────────────

#[test]
fn sentinel_is_found_by_exact_name() {
    let catalog = clients();
    let resolver = EngagementResolver::with_default_sentinel(&catalog);
    assert_eq!(resolver.sentinel().id, "pool");
    assert!(resolver.is_sentinel(&Client::new("pool", "renamed")));
    assert!(!resolver.is_sentinel(&catalog[0]));
}

#[test]
fn sentinel_falls_back_to_first_client() {
    let catalog = vec![Client::new("acme", "Acme Corp"), Client::new("pool", "talent pool")];
    let resolver = EngagementResolver::with_default_sentinel(&catalog);
    assert_eq!(resolver.sentinel().id, "acme", "name match is case-sensitive");
}

#[test]
fn empty_catalog_yields_placeholder_pool() {
    let resolver = EngagementResolver::with_default_sentinel(&[]);
    let client = resolver.current_client(&[period("acme", date(2023, 1, 1), None)], now());
    assert_eq!(client.id, PLACEHOLDER_POOL_ID);
    assert_eq!(client.name, "Talent Pool");
}

// ── Rule chain ───────────────────────────────────────────────────────────────

#[test]
fn no_periods_resolves_to_pool() {
    let catalog = clients();
    let resolver = EngagementResolver::with_default_sentinel(&catalog);
    assert_eq!(resolver.current_client(&[], now()).id, "pool");
}

#[test]
fn open_pool_period_resolves_to_pool() {
    let catalog = clients();
    let resolver = EngagementResolver::with_default_sentinel(&catalog);
    let periods = [period("pool", date(2023, 1, 1), None)];
    assert_eq!(resolver.current_client(&periods, now()).id, "pool");
}

#[test]
fn open_period_wins_over_closed_history() {
    let catalog = clients();
    let resolver = EngagementResolver::with_default_sentinel(&catalog);
    let periods = [
        period("acme", date(2023, 1, 1), Some(date(2023, 6, 1))),
        period("globex", date(2023, 7, 1), None),
    ];
    assert_eq!(resolver.current_client(&periods, now()).id, "globex");
}

#[test]
fn most_recent_closed_period_wins_when_nothing_is_open() {
    let catalog = clients();
    let resolver = EngagementResolver::with_default_sentinel(&catalog);
    // Unsorted on purpose.
    let periods = [
        period("globex", date(2022, 7, 1), Some(date(2022, 12, 1))),
        period("acme", date(2022, 1, 1), Some(date(2022, 6, 1))),
    ];
    assert_eq!(resolver.current_client(&periods, now()).id, "globex");
}

#[test]
fn latest_start_wins_among_overlapping_open_periods() {
    let catalog = clients();
    let resolver = EngagementResolver::with_default_sentinel(&catalog);
    let periods = [
        period("initech", date(2023, 9, 1), None),
        period("acme", date(2023, 3, 1), Some(date(2024, 12, 31))),
        period("globex", date(2023, 5, 1), None),
        // A later pool period never outranks a real client.
        period("pool", date(2023, 12, 1), None),
    ];
    assert_eq!(resolver.current_client(&periods, now()).id, "initech");
}

#[test]
fn period_ending_today_is_closed() {
    let catalog = clients();
    let resolver = EngagementResolver::with_default_sentinel(&catalog);
    let periods = [
        period("acme", date(2023, 1, 1), Some(now())),
        period("globex", date(2022, 1, 1), Some(date(2022, 3, 1))),
    ];
    // Not open, but still the most recent closed engagement.
    assert_eq!(resolver.current_client(&periods, now()).id, "acme");
}

#[test]
fn equal_start_dates_keep_first_listed_period() {
    let catalog = clients();
    let resolver = EngagementResolver::with_default_sentinel(&catalog);
    let periods = [
        period("globex", date(2023, 5, 1), None),
        period("acme", date(2023, 5, 1), None),
    ];
    assert_eq!(resolver.current_client(&periods, now()).id, "globex");
}

#[test]
fn dangling_open_reference_falls_through_to_closed_rule() {
    init_logging();
    let catalog = clients();
    let resolver = EngagementResolver::with_default_sentinel(&catalog);
    let periods = [
        period("acme", date(2022, 1, 1), Some(date(2022, 6, 1))),
        period("vanished", date(2023, 1, 1), None),
    ];
    // Open rule picks "vanished" (dangling). Closed rule's best candidate is
    // also "vanished" (start 2023-01-01 beats end 2022-06-01), so: pool.
    assert_eq!(resolver.current_client(&periods, now()).id, "pool");

    let periods = [
        period("acme", date(2023, 2, 1), Some(date(2023, 12, 1))),
        period("vanished", date(2023, 1, 1), None),
    ];
    assert_eq!(resolver.current_client(&periods, now()).id, "acme");
}

#[test]
fn only_pool_history_resolves_to_pool() {
    let catalog = clients();
    let resolver = EngagementResolver::with_default_sentinel(&catalog);
    let periods = [
        period("pool", date(2022, 1, 1), Some(date(2022, 6, 1))),
        period("pool", date(2022, 7, 1), Some(date(2022, 9, 1))),
    ];
    assert_eq!(resolver.current_client(&periods, now()).id, "pool");
}

#[test]
fn resolver_always_returns_a_client() {
    let catalog = clients();
    let resolvers = [
        EngagementResolver::with_default_sentinel(&catalog),
        EngagementResolver::with_default_sentinel(&[]),
        EngagementResolver::new(&catalog, "Nobody"),
    ];
    let histories: Vec<Vec<EngagementPeriod>> = vec![
        vec![],
        vec![period("ghost", date(2020, 1, 1), None)],
        vec![period("acme", date(2030, 1, 1), Some(date(2020, 1, 1)))],
    ];
    for resolver in &resolvers {
        for history in &histories {
            let client = resolver.current_client(history, now());
            assert!(!client.id.is_empty());
        }
    }
}

// ── Badges and availability ──────────────────────────────────────────────────

#[test]
fn member_engagement_reports_status() {
    let catalog = clients();
    let resolver = EngagementResolver::with_default_sentinel(&catalog);

    let engaged = Member::new("m1", "Ana").with_engagement("acme", date(2023, 1, 1), None);
    let idle = Member::new("m2", "Bruno");

    let badge = resolver.member_engagement(&engaged, now());
    assert_eq!(badge.status, EngagementStatus::Engaged);
    assert_eq!(badge.client.name, "Acme Corp");

    let badge = resolver.member_engagement(&idle, now());
    assert_eq!(badge.status, EngagementStatus::Available);
    assert_eq!(badge.member_name, "Bruno");
}

#[test]
fn availability_counts_by_resolved_client() {
    let catalog = clients();
    let resolver = EngagementResolver::with_default_sentinel(&catalog);
    let members = vec![
        Member::new("m1", "A").with_engagement("globex", date(2023, 1, 1), None),
        Member::new("m2", "B").with_engagement("acme", date(2023, 1, 1), None),
        Member::new("m3", "C").with_engagement("globex", date(2023, 6, 1), None),
        Member::new("m4", "D"),
        Member::new("m5", "E").with_engagement("acme", date(2022, 1, 1), Some(date(2022, 2, 1))),
    ];

    let summary = resolver.availability(&members, now());

    assert_eq!(summary.total, 5);
    assert_eq!(summary.engaged, 4);
    assert_eq!(summary.available, 1);

    let rows: Vec<(&str, usize)> = summary
        .by_client
        .iter()
        .map(|r| (r.client.id.as_str(), r.headcount))
        .collect();
    assert_eq!(rows, vec![("acme", 2), ("globex", 2), ("pool", 1)]);
}
