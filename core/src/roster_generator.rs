//! Synthetic roster generation for demos and determinism tests.
//!
//! Produces a complete RosterSnapshot (catalog + members) from a seed.
//! The catalog is fixed; members, their skill levels and their
//! engagement histories are drawn from per-stage RNG streams.
//! A small share of assignments carry off-scale labels so the degrade
//! paths are exercised too.

use crate::{
    config::DEFAULT_SENTINEL_CLIENT_NAME,
    model::{Category, Client, KnowledgeArea, Member, Scale, Skill},
    name_generator::NameGenerator,
    rng::{GeneratorStream, RngBank, RosterRng},
    snapshot::{Catalog, RosterSnapshot},
};
use chrono::{Duration, NaiveDate};

pub const POOL_CLIENT_ID: &str = "client-pool";

const OFF_SCALE_LABEL_RATE: f64 = 0.02;
const OPEN_ENGAGEMENT_RATE: f64 = 0.6;
const POOL_PERIOD_RATE: f64 = 0.2;
const HISTORY_WINDOW_DAYS: i64 = 720;

pub struct RosterGenerator {
    seed:         u64,
    member_count: usize,
    client_count: usize,
    as_of:        NaiveDate,
}

impl RosterGenerator {
    pub fn new(seed: u64, member_count: usize, as_of: NaiveDate) -> Self {
        Self {
            seed,
            member_count,
            client_count: 6,
            as_of,
        }
    }

    pub fn with_client_count(mut self, client_count: usize) -> Self {
        self.client_count = client_count;
        self
    }

    pub fn generate(&self) -> RosterSnapshot {
        let bank = RngBank::new(self.seed);
        let mut member_rng = bank.for_stream(GeneratorStream::Members);
        let mut skill_rng = bank.for_stream(GeneratorStream::Skills);
        let mut engagement_rng = bank.for_stream(GeneratorStream::Engagements);

        let mut catalog = Self::base_catalog();
        catalog.clients = self.clients(&mut engagement_rng);

        let members = (1..=self.member_count)
            .map(|n| {
                let id = format!("member-{n:03}");
                let name = NameGenerator::generate_full_name(&mut member_rng);
                let member = Member::new(&id, &name);
                let member = Self::assign_skills(member, &catalog, &mut skill_rng);
                self.assign_engagements(member, &catalog.clients, &mut engagement_rng)
            })
            .collect();

        log::debug!(
            "roster_generator: seed={} members={} clients={}",
            self.seed,
            self.member_count,
            catalog.clients.len()
        );

        RosterSnapshot { catalog, members }
    }

    /// Fixed reference catalog shared by every generated roster.
    pub fn base_catalog() -> Catalog {
        let scales = vec![
            Scale::ordinal(
                "proficiency",
                &[("Beginner", 0), ("Intermediate", 1), ("Advanced", 2), ("Expert", 3)],
            ),
            Scale::numeric("years", &["0", "1", "2", "3", "4", "5"]),
        ];

        let categories = vec![
            category("cat-languages", "Languages", "proficiency"),
            category("cat-platforms", "Platforms", "proficiency"),
            category("cat-practices", "Practices", "years"),
        ];

        let knowledge_areas = vec![
            area("ka-backend", "Backend"),
            area("ka-frontend", "Frontend"),
            area("ka-infra", "Infrastructure"),
            area("ka-data", "Data"),
        ];

        let skills = vec![
            skill("sk-rust", "Rust", "cat-languages", "ka-backend"),
            skill("sk-java", "Java", "cat-languages", "ka-backend"),
            skill("sk-typescript", "TypeScript", "cat-languages", "ka-frontend"),
            skill("sk-react", "React", "cat-platforms", "ka-frontend"),
            skill("sk-kubernetes", "Kubernetes", "cat-platforms", "ka-infra"),
            skill("sk-terraform", "Terraform", "cat-platforms", "ka-infra"),
            skill("sk-sql", "SQL", "cat-languages", "ka-data"),
            skill("sk-spark", "Spark", "cat-platforms", "ka-data"),
            skill("sk-tdd", "Test-Driven Development", "cat-practices", "ka-backend"),
            skill("sk-observability", "Observability", "cat-practices", "ka-infra"),
        ];

        Catalog {
            scales,
            categories,
            knowledge_areas,
            skills,
            clients: Vec::new(),
        }
    }

    fn clients(&self, rng: &mut RosterRng) -> Vec<Client> {
        let mut clients = vec![Client::new(POOL_CLIENT_ID, DEFAULT_SENTINEL_CLIENT_NAME)];
        for n in 1..=self.client_count {
            let name = NameGenerator::generate_client_name(rng);
            clients.push(Client::new(&format!("client-{n:02}"), &name));
        }
        clients
    }

    fn assign_skills(mut member: Member, catalog: &Catalog, rng: &mut RosterRng) -> Member {
        let wanted = 2 + rng.next_u64_below(4) as usize;
        let mut chosen: Vec<&Skill> = Vec::new();
        while chosen.len() < wanted.min(catalog.skills.len()) {
            let candidate = rng.pick(&catalog.skills);
            if !chosen.iter().any(|s| s.id == candidate.id) {
                chosen.push(candidate);
            }
        }

        for skill in chosen {
            let Some(scale) = catalog.scale_for_skill(&skill.id) else {
                continue;
            };
            let level = if rng.chance(OFF_SCALE_LABEL_RATE) {
                "Unrated".to_string()
            } else {
                rng.pick(&scale.labels()).to_string()
            };
            member = member.with_skill(&skill.id, &scale.id, &level);
        }
        member
    }

    /// Back-to-back periods ending near `as_of`; the last one may be open.
    fn assign_engagements(
        &self,
        mut member: Member,
        clients: &[Client],
        rng: &mut RosterRng,
    ) -> Member {
        let period_count = rng.next_u64_below(4);
        let mut start = self.as_of - Duration::days(HISTORY_WINDOW_DAYS);

        for n in 0..period_count {
            let client = if rng.chance(POOL_PERIOD_RATE) || clients.len() == 1 {
                &clients[0]
            } else {
                &clients[1 + rng.next_u64_below(clients.len() as u64 - 1) as usize]
            };
            let length = Duration::days(60 + rng.next_u64_below(180) as i64);
            let is_last = n + 1 == period_count;
            let end = if is_last && rng.chance(OPEN_ENGAGEMENT_RATE) {
                None
            } else {
                Some(start + length)
            };
            member = member.with_engagement(&client.id, start, end);
            start = start + length + Duration::days(1 + rng.next_u64_below(30) as i64);
        }
        member
    }
}

fn category(id: &str, name: &str, scale_id: &str) -> Category {
    Category { id: id.into(), name: name.into(), scale_id: scale_id.into() }
}

fn area(id: &str, name: &str) -> KnowledgeArea {
    KnowledgeArea { id: id.into(), name: name.into() }
}

fn skill(id: &str, name: &str, category_id: &str, knowledge_area_id: &str) -> Skill {
    Skill {
        id:                id.into(),
        name:              name.into(),
        category_id:       category_id.into(),
        knowledge_area_id: knowledge_area_id.into(),
    }
}
