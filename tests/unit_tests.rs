// Unit tests for Plateful core

use chrono::{DateTime, Duration, TimeZone, Utc};
use plateful_core::core::{
    distance::{distance_km, haversine_distance},
    perishability::{parse_expiry, perishability_score, sort_by_urgency},
    proximity::{nearby_within, DEFAULT_RADIUS_KM},
    route::sequence_route,
};
use plateful_core::models::{FoodCategory, GeoPoint, Located, PerishableItem};

#[derive(Debug, Clone, PartialEq)]
struct Pickup {
    id: u32,
    location: GeoPoint,
}

impl Located for Pickup {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

fn pickup(id: u32, latitude: f64, longitude: f64) -> Pickup {
    Pickup { id, location: GeoPoint { latitude, longitude } }
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 10, 12, 0, 0).unwrap()
}

#[test]
fn test_distance_zero_for_same_point() {
    let points = [(19.076, 72.877), (-33.8688, 151.2093), (89.9, -179.9), (0.0, 0.0)];
    for (lat, lon) in points {
        assert!(haversine_distance(lat, lon, lat, lon).abs() < 1e-9);
    }
}

#[test]
fn test_distance_symmetry() {
    let pairs = [
        ((19.076, 72.877), (19.086, 72.887)),
        ((51.5074, -0.1278), (40.7128, -74.0060)),
        ((-45.0, 170.0), (45.0, -170.0)),
    ];
    for ((lat1, lon1), (lat2, lon2)) in pairs {
        let a = GeoPoint { latitude: lat1, longitude: lon1 };
        let b = GeoPoint { latitude: lat2, longitude: lon2 };
        assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
    }
}

#[test]
fn test_distance_known_fixture() {
    let distance = haversine_distance(19.076, 72.877, 19.086, 72.887);
    assert!((distance - 1.530).abs() < 0.005, "Expected ~1.53km, got {}", distance);
}

#[test]
fn test_nearby_only_within_radius_and_sorted() {
    let reference = GeoPoint { latitude: 19.066, longitude: 72.867 };
    let candidates: Vec<Pickup> = (0..20)
        .map(|i| pickup(i, 19.066 + (i as f64 * 0.013) * if i % 2 == 0 { 1.0 } else { -1.0 }, 72.867))
        .collect();

    let result = nearby_within(reference, &candidates, DEFAULT_RADIUS_KM);

    assert!(result.len() <= candidates.len());
    assert!(!result.is_empty());
    for p in &result {
        assert!(distance_km(reference, p.location) <= DEFAULT_RADIUS_KM);
    }
    for pair in result.windows(2) {
        assert!(distance_km(reference, pair[0].location) <= distance_km(reference, pair[1].location));
    }
}

#[test]
fn test_nearby_does_not_mutate_input() {
    let reference = GeoPoint { latitude: 0.0, longitude: 0.0 };
    let candidates = vec![pickup(1, 0.0, 0.05), pickup(2, 0.0, 0.01)];
    let before = candidates.clone();

    let first = nearby_within(reference, &candidates, 50.0);
    let second = nearby_within(reference, &candidates, 50.0);

    assert_eq!(candidates, before);
    assert_eq!(first, second);
    assert_eq!(first[0].id, 2);
}

#[test]
fn test_route_is_permutation() {
    let start = GeoPoint { latitude: 19.066, longitude: 72.867 };
    let stops: Vec<Pickup> = (0..12)
        .map(|i| pickup(i, 19.0 + (i as f64 * 7.0 % 11.0) * 0.01, 72.8 + (i as f64 * 3.0 % 5.0) * 0.02))
        .collect();

    let route = sequence_route(start, &stops);

    assert_eq!(route.len(), stops.len());
    let mut ids: Vec<u32> = route.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..12).collect::<Vec<u32>>());
}

#[test]
fn test_route_empty_and_single() {
    let start = GeoPoint { latitude: 0.0, longitude: 0.0 };
    let empty: Vec<Pickup> = vec![];
    assert!(sequence_route(start, &empty).is_empty());

    let one = vec![pickup(7, 10.0, 10.0)];
    let route = sequence_route(start, &one);
    assert_eq!(route.len(), 1);
    assert_eq!(route[0].id, 7);
}

#[test]
fn test_route_collinear_in_distance_order() {
    let start = GeoPoint { latitude: 19.0, longitude: 72.8 };
    let stops = vec![pickup(3, 19.03, 72.8), pickup(1, 19.01, 72.8), pickup(2, 19.02, 72.8)];

    let ids: Vec<u32> = sequence_route(start, &stops).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_route_over_many_stops_visits_each_once() {
    let start = GeoPoint { latitude: 19.066, longitude: 72.867 };
    let stops: Vec<GeoPoint> = (0..60)
        .map(|i| GeoPoint {
            latitude: 19.0 + ((i * 37) % 60) as f64 * 0.002,
            longitude: 72.8 + ((i * 11) % 60) as f64 * 0.002,
        })
        .collect();

    let route = sequence_route(start, &stops);

    assert_eq!(route.len(), stops.len());
    for stop in &stops {
        assert_eq!(route.iter().filter(|r| std::ptr::eq(**r, stop)).count(), 1);
    }
}

#[test]
fn test_perishability_fixtures() {
    let now = fixed_now();
    let prepared = PerishableItem { category: FoodCategory::Prepared, expires_at: now + Duration::hours(2) };
    let raw = PerishableItem { category: FoodCategory::Raw, expires_at: now + Duration::hours(30) };

    assert_eq!(perishability_score(&prepared, now), 9.0);
    assert_eq!(perishability_score(&raw, now), 4.5);
}

#[test]
fn test_sort_by_urgency_stable_with_equal_scores() {
    let now = fixed_now();
    // Raw at 10h and 11h both land in the 12h bucket and tie at 6.5
    let items = vec![
        PerishableItem { category: FoodCategory::Raw, expires_at: now + Duration::hours(10) },
        PerishableItem { category: FoodCategory::Prepared, expires_at: now + Duration::hours(30) },
        PerishableItem { category: FoodCategory::Raw, expires_at: now + Duration::hours(11) },
        PerishableItem { category: FoodCategory::Raw, expires_at: now + Duration::hours(3) },
    ];

    let sorted = sort_by_urgency(&items, now);
    let scores: Vec<f64> = sorted.iter().map(|i| perishability_score(*i, now)).collect();
    assert_eq!(scores, vec![7.5, 6.5, 6.5, 6.0]);

    // Equal scores keep input order
    assert!(std::ptr::eq(sorted[1], &items[0]));
    assert!(std::ptr::eq(sorted[2], &items[2]));
}

#[test]
fn test_scoring_is_deterministic() {
    let now = fixed_now();
    let item = PerishableItem { category: FoodCategory::Raw, expires_at: now + Duration::hours(20) };
    assert_eq!(perishability_score(&item, now), perishability_score(&item, now));
}

#[test]
fn test_parse_expiry_round_trip_with_scoring() {
    let now = fixed_now();
    let expires_at = parse_expiry("2025-07-10T18:00:00Z").unwrap();
    let item = PerishableItem { category: FoodCategory::Prepared, expires_at };

    // 6 hours left -> time score 8
    assert_eq!(perishability_score(&item, now), 8.0);
    assert!(parse_expiry("").is_err());
}

#[test]
fn test_geo_point_validation() {
    assert!(GeoPoint::new(19.076, 72.877).is_ok());
    assert!(GeoPoint::new(-91.0, 0.0).is_err());
    assert!(GeoPoint::new(0.0, 181.0).is_err());
}
