//! Embedded demonstration records, anchored to the current clock.
//!
//! `seed.json` carries relative ages (`age_days`) instead of absolute
//! timestamps, so the seeded history always looks freshly lived-in: two
//! records inside the weekly stats window, three outside it.

use chrono::{DateTime, Duration, Utc};
use fbhub_core::{Direction, FeedbackKind, FeedbackRecord};
use serde::Deserialize;

const SEED_JSON: &str = include_str!("seed.json");

#[derive(Debug, Deserialize)]
struct SeedRecord {
    id: String,
    direction: Direction,
    counterpart: Option<String>,
    kind: FeedbackKind,
    categories: Vec<String>,
    message: String,
    age_days: i64,
    #[serde(default)]
    anonymous: bool,
}

impl SeedRecord {
    fn into_record(self, now: DateTime<Utc>) -> FeedbackRecord {
        FeedbackRecord {
            id: self.id,
            direction: self.direction,
            counterpart: self.counterpart,
            kind: self.kind,
            categories: self.categories,
            message: self.message,
            ts: now - Duration::days(self.age_days),
            anonymous: self.anonymous,
        }
    }
}

/// Deserialize the embedded seed data, oldest entries furthest in the past.
pub fn seed_records(now: DateTime<Utc>) -> anyhow::Result<Vec<FeedbackRecord>> {
    let seeds: Vec<SeedRecord> = serde_json::from_str(SEED_JSON)?;
    Ok(seeds.into_iter().map(|s| s.into_record(now)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fbhub_core::view::compute_stats;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_seed_parses() {
        let now = Utc::now();
        let records = seed_records(now).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].counterpart.as_deref(), Some("Sarah Johnson"));
        assert_eq!(records[0].ts, now - Duration::days(2));
    }

    #[test]
    fn anonymous_record_has_no_counterpart() {
        let records = seed_records(Utc::now()).unwrap();
        let anon = &records[2];
        assert!(anon.anonymous);
        assert_eq!(anon.counterpart, None);
        assert_eq!(anon.counterpart_label(), "Anonymous");
    }

    #[test]
    fn seed_straddles_the_weekly_window() {
        let now = Utc::now();
        let records = seed_records(now).unwrap();
        let stats = compute_stats(&records, now);
        assert_eq!(stats.given, 2);
        assert_eq!(stats.received, 3);
        // ages 2 and 5 are inside the window; 7 sits exactly on the
        // boundary and is excluded
        assert_eq!(stats.this_week, 2);
    }
}
