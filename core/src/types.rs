//! Shared primitive types used across the entire core.

/// A stable, unique identifier for any catalog or roster entity.
pub type EntityId = String;

/// The integer position of a level label within its scale.
/// Higher outranks lower. Unrecognised labels resolve to 0.
pub type Rank = i64;
