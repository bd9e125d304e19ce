//! Engagement resolution — which single client a member currently
//! represents, given an unordered and possibly overlapping history.
//!
//! RULE CHAIN (evaluated fresh on every call against `now`):
//!   1. Empty client catalog     → synthesized placeholder pool client
//!   2. No periods               → pool
//!   3. Open periods             → latest start, pool periods excluded
//!   4. Most recent non-pool     → latest end (or start when open)
//!   5. Otherwise                → pool
//!
//! A period pointing at a client missing from the catalog is skipped and
//! the chain falls through to the next rule. This module never fails.

use crate::{
    config::DEFAULT_SENTINEL_CLIENT_NAME,
    model::{Client, EngagementPeriod, Member},
    types::EntityId,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Id given to the placeholder pool client when the catalog is empty.
pub const PLACEHOLDER_POOL_ID: &str = "talent-pool";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EngagementStatus {
    Engaged,
    Available,
}

/// The "current client" badge for one member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberEngagement {
    pub member_id:   EntityId,
    pub member_name: String,
    pub client:      Client,
    pub status:      EngagementStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientHeadcount {
    pub client:    Client,
    pub headcount: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailabilitySummary {
    pub total:     usize,
    pub engaged:   usize,
    pub available: usize,
    pub by_client: Vec<ClientHeadcount>,
}

pub struct EngagementResolver<'a> {
    clients:  &'a [Client],
    sentinel: Client,
}

impl<'a> EngagementResolver<'a> {
    /// Resolve the pool client once: the client named `sentinel_name`
    /// (exact, case-sensitive), else the first catalog entry, else a
    /// synthesized placeholder.
    pub fn new(clients: &'a [Client], sentinel_name: &str) -> Self {
        let sentinel = match clients.iter().find(|c| c.name == sentinel_name) {
            Some(c) => c.clone(),
            None => match clients.first() {
                Some(first) => {
                    log::debug!(
                        "engagement: no client named '{sentinel_name}', using '{}' as pool",
                        first.name
                    );
                    first.clone()
                }
                None => {
                    log::warn!("engagement: client catalog is empty, using placeholder pool");
                    Client::new(PLACEHOLDER_POOL_ID, DEFAULT_SENTINEL_CLIENT_NAME)
                }
            },
        };
        Self { clients, sentinel }
    }

    pub fn with_default_sentinel(clients: &'a [Client]) -> Self {
        Self::new(clients, DEFAULT_SENTINEL_CLIENT_NAME)
    }

    pub fn sentinel(&self) -> &Client {
        &self.sentinel
    }

    pub fn is_sentinel(&self, client: &Client) -> bool {
        self.is_sentinel_id(&client.id)
    }

    fn is_sentinel_id(&self, client_id: &str) -> bool {
        self.sentinel.id == client_id
    }

    pub fn current_client(&self, periods: &[EngagementPeriod], now: NaiveDate) -> Client {
        if self.clients.is_empty() || periods.is_empty() {
            return self.sentinel.clone();
        }

        // Open rule. Ties on start keep the earliest-listed period.
        let open = self
            .non_pool(periods)
            .filter(|p| p.end_date.map_or(true, |end| end > now))
            .fold(None, |best: Option<&EngagementPeriod>, p| match best {
                Some(b) if b.start_date >= p.start_date => Some(b),
                _ => Some(p),
            });
        if let Some(period) = open {
            if let Some(client) = self.lookup(period) {
                return client;
            }
        }

        // Most-recent-closed rule. Same tie policy.
        let recent = self
            .non_pool(periods)
            .fold(None, |best: Option<&EngagementPeriod>, p| match best {
                Some(b) if last_seen(b) >= last_seen(p) => Some(b),
                _ => Some(p),
            });
        if let Some(period) = recent {
            if let Some(client) = self.lookup(period) {
                return client;
            }
        }

        self.sentinel.clone()
    }

    pub fn member_engagement(&self, member: &Member, now: NaiveDate) -> MemberEngagement {
        let client = self.current_client(&member.engagements, now);
        let status = if self.is_sentinel(&client) {
            EngagementStatus::Available
        } else {
            EngagementStatus::Engaged
        };
        MemberEngagement {
            member_id: member.id.clone(),
            member_name: member.name.clone(),
            client,
            status,
        }
    }

    /// Headcount per resolved client, largest first, ties by client name.
    /// The pool appears as its own row.
    pub fn availability(&self, members: &[Member], now: NaiveDate) -> AvailabilitySummary {
        let mut counts: HashMap<Client, usize> = HashMap::new();
        let mut engaged = 0usize;

        for member in members {
            let badge = self.member_engagement(member, now);
            if badge.status == EngagementStatus::Engaged {
                engaged += 1;
            }
            *counts.entry(badge.client).or_insert(0) += 1;
        }

        let mut by_client: Vec<ClientHeadcount> = counts
            .into_iter()
            .map(|(client, headcount)| ClientHeadcount { client, headcount })
            .collect();
        by_client.sort_by(|a, b| {
            b.headcount
                .cmp(&a.headcount)
                .then_with(|| a.client.name.cmp(&b.client.name))
                .then_with(|| a.client.id.cmp(&b.client.id))
        });

        AvailabilitySummary {
            total: members.len(),
            engaged,
            available: members.len() - engaged,
            by_client,
        }
    }

    fn non_pool<'p>(
        &'p self,
        periods: &'p [EngagementPeriod],
    ) -> impl Iterator<Item = &'p EngagementPeriod> + 'p {
        periods.iter().filter(move |p| !self.is_sentinel_id(&p.client_id))
    }

    fn lookup(&self, period: &EngagementPeriod) -> Option<Client> {
        let found = self.clients.iter().find(|c| c.id == period.client_id).cloned();
        if found.is_none() {
            log::warn!(
                "engagement: member '{}' references unknown client '{}', skipped",
                period.member_id,
                period.client_id
            );
        }
        found
    }
}

fn last_seen(period: &EngagementPeriod) -> NaiveDate {
    period.end_date.unwrap_or(period.start_date)
}
