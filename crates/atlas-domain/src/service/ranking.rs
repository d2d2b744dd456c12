//! Ranking - The strongest heroes first
//!
//! Level decides, experience breaks ties. Heroes equal on both fall back
//! to identity order so the ranking is stable between calls.

use crate::model::hero::Hero;
use crate::query::{HeroField, HeroQuery, OrderKey};

pub const DEFAULT_TOP_LIMIT: usize = 10;
pub const MAX_TOP_LIMIT: usize = 100;

/// Level descending, then xp descending
pub const TOP_ORDERING: [OrderKey<HeroField>; 2] = [
    OrderKey::desc(HeroField::Level),
    OrderKey::desc(HeroField::Xp),
];

/// Resolve a requested limit: absent means the default, anything outside
/// `1..=MAX_TOP_LIMIT` is clamped into it.
pub fn clamp_top_limit(requested: Option<i64>) -> usize {
    match requested {
        None => DEFAULT_TOP_LIMIT,
        Some(n) => n.clamp(1, MAX_TOP_LIMIT as i64) as usize,
    }
}

/// Re-order a query for ranking, keeping its constraints
pub fn ranked(query: HeroQuery) -> HeroQuery {
    query.order_by(TOP_ORDERING)
}

/// Rank `heroes` and keep the first `limit`
pub fn top_heroes(heroes: impl IntoIterator<Item = Hero>, limit: usize) -> Vec<Hero> {
    let mut ranking = ranked(HeroQuery::unfiltered()).evaluate(heroes);
    ranking.truncate(limit);
    ranking
}
