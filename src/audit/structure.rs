//! Structural list checks
//!
//! These operate on lists rather than individual cards: staleness (no card
//! created within the threshold window) and deletion candidates (completed
//! cards old enough to archive). Card ages come from ID-encoded creation
//! timestamps; cards with undecodable IDs have unknown age and are excluded
//! from the computation.

use chrono::{DateTime, Utc};

use crate::classifier::{ListRole, RoleSet};
use crate::config::Thresholds;
use crate::models::{DeletionCandidate, List, StaleList};

/// Age in days of the most recently created card, if any age is known.
pub(crate) fn newest_card_age(list: &List, now: DateTime<Utc>) -> Option<i64> {
    list.cards
        .iter()
        .filter_map(|card| card.age_days(now))
        .min()
}

/// Staleness check for one list.
///
/// A list is stale when its newest known card age is at or past the
/// threshold and its name matches none of the exclusion keywords. A list
/// where every card age is unknown is never reported stale.
pub(crate) fn stale_list(
    list: &List,
    now: DateTime<Utc>,
    thresholds: &Thresholds,
) -> Option<StaleList> {
    if thresholds.stale_exempt(&list.name) {
        return None;
    }
    let newest = newest_card_age(list, now)?;
    if newest >= thresholds.stale_days {
        return Some(StaleList {
            list_name: list.name.clone(),
            newest_card_age_days: newest,
        });
    }
    None
}

/// Completed cards old enough to be archived or deleted.
pub(crate) fn deletion_candidates(
    list: &List,
    roles: &RoleSet,
    now: DateTime<Utc>,
    thresholds: &Thresholds,
) -> Vec<DeletionCandidate> {
    if !roles.contains(&ListRole::Done) {
        return Vec::new();
    }
    list.cards
        .iter()
        .filter_map(|card| {
            let age_days = card.age_days(now)?;
            if age_days > thresholds.deletion_age_days {
                Some(DeletionCandidate {
                    card_id: card.id.clone(),
                    card_name: card.name.clone(),
                    list_name: list.name.clone(),
                    age_days,
                })
            } else {
                None
            }
        })
        .collect()
}
