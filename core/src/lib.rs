//! talentdesk-core: proficiency ranking and engagement resolution for
//! the staffing dashboards.
//!
//! Every computation is pure and synchronous over a read-only snapshot.
//! Only loading (config files, snapshot files) can fail.

pub mod config;
pub mod dashboard;
pub mod engagement;
pub mod error;
pub mod model;
pub mod name_generator;
pub mod proficiency;
pub mod rng;
pub mod roster_generator;
pub mod scale;
pub mod snapshot;
pub mod types;
