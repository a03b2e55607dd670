use chrono::{DateTime, Utc};

use crate::error::{CoreError, Result};
use crate::models::{FoodCategory, Perishable};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Category risk: prepared food spoils faster than raw produce
#[inline]
pub fn base_score(category: FoodCategory) -> f64 {
    match category {
        FoodCategory::Prepared => 8.0,
        FoodCategory::Raw => 5.0,
    }
}

/// Time pressure by hours left before expiry
///
/// Already-expired items (negative hours) land in the most urgent bucket.
#[inline]
pub fn time_score(hours_until_expiry: f64) -> f64 {
    if hours_until_expiry <= 4.0 {
        10.0
    } else if hours_until_expiry <= 12.0 {
        8.0
    } else if hours_until_expiry <= 24.0 {
        6.0
    } else if hours_until_expiry <= 48.0 {
        4.0
    } else {
        2.0
    }
}

/// Hours from `now` until the item expires, negative once expired
pub fn hours_until_expiry<T: Perishable>(item: &T, now: DateTime<Utc>) -> f64 {
    (item.expires_at() - now).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

/// Urgency score in [3.5, 9.0], higher means collect sooner
///
/// score = (base_score(category) + time_score(hours_until_expiry)) / 2
pub fn perishability_score<T: Perishable>(item: &T, now: DateTime<Utc>) -> f64 {
    let base = base_score(item.category());
    let time = time_score(hours_until_expiry(item, now));
    (base + time) / 2.0
}

/// Items paired with their scores, most urgent first, ties in input order
pub fn score_all<'a, T: Perishable>(items: &'a [T], now: DateTime<Utc>) -> Vec<(&'a T, f64)> {
    let mut scored: Vec<(&'a T, f64)> = items
        .iter()
        .map(|item| (item, perishability_score(item, now)))
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
}

/// Items ordered by descending urgency, ties in input order
pub fn sort_by_urgency<'a, T: Perishable>(items: &'a [T], now: DateTime<Utc>) -> Vec<&'a T> {
    score_all(items, now).into_iter().map(|(item, _)| item).collect()
}

/// Parse an RFC 3339 expiry timestamp into UTC
pub fn parse_expiry(text: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CoreError::InvalidTimestamp(format!("{}: {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PerishableItem;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 10, 12, 0, 0).unwrap()
    }

    fn item(category: FoodCategory, hours: i64) -> PerishableItem {
        PerishableItem {
            category,
            expires_at: now() + Duration::hours(hours),
        }
    }

    #[test]
    fn test_prepared_expiring_soon() {
        let score = perishability_score(&item(FoodCategory::Prepared, 2), now());
        assert_eq!(score, 9.0);
    }

    #[test]
    fn test_raw_with_buffer() {
        let score = perishability_score(&item(FoodCategory::Raw, 30), now());
        assert_eq!(score, 4.5);
    }

    #[test]
    fn test_expired_is_most_urgent() {
        let score = perishability_score(&item(FoodCategory::Raw, -6), now());
        assert_eq!(score, 7.5);
    }

    #[test]
    fn test_bucket_boundaries_are_inclusive() {
        assert_eq!(time_score(4.0), 10.0);
        assert_eq!(time_score(4.01), 8.0);
        assert_eq!(time_score(12.0), 8.0);
        assert_eq!(time_score(24.0), 6.0);
        assert_eq!(time_score(48.0), 4.0);
        assert_eq!(time_score(48.5), 2.0);
    }

    #[test]
    fn test_score_range() {
        let lowest = perishability_score(&item(FoodCategory::Raw, 100), now());
        let highest = perishability_score(&item(FoodCategory::Prepared, 0), now());
        assert_eq!(lowest, 3.5);
        assert_eq!(highest, 9.0);
    }

    #[test]
    fn test_sort_by_urgency_is_stable() {
        let items = vec![
            item(FoodCategory::Raw, 72),      // 3.5
            item(FoodCategory::Prepared, 20), // 7.0
            item(FoodCategory::Raw, 3),       // 7.5
            item(FoodCategory::Prepared, 22), // 7.0
        ];

        let sorted = sort_by_urgency(&items, now());
        assert!(std::ptr::eq(sorted[0], &items[2]));
        assert!(std::ptr::eq(sorted[1], &items[1]));
        assert!(std::ptr::eq(sorted[2], &items[3]));
        assert!(std::ptr::eq(sorted[3], &items[0]));
    }

    #[test]
    fn test_parse_expiry() {
        let parsed = parse_expiry("2025-07-10T18:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 7, 10, 18, 0, 0).unwrap());

        let offset = parse_expiry("2025-07-10T23:30:00+05:30").unwrap();
        assert_eq!(offset, parsed);
    }

    #[test]
    fn test_parse_expiry_rejects_garbage() {
        assert!(matches!(
            parse_expiry("next tuesday"),
            Err(CoreError::InvalidTimestamp(_))
        ));
    }
}
