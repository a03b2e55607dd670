use crate::core::distance::distance_km;
use crate::models::{GeoPoint, Located};

/// Search radius used when the caller does not supply one
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// A candidate paired with its distance from the reference point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearby<'a, T> {
    pub entity: &'a T,
    pub distance_km: f64,
}

/// Candidates within `max_distance_km` of `reference`, nearest first
///
/// Each distance is computed once. The sort is stable, so candidates at the
/// same distance keep their input order.
pub fn nearby_with_distance<'a, T: Located>(
    reference: GeoPoint,
    candidates: &'a [T],
    max_distance_km: f64,
) -> Vec<Nearby<'a, T>> {
    let mut nearby: Vec<Nearby<'a, T>> = candidates
        .iter()
        .map(|entity| Nearby {
            entity,
            distance_km: distance_km(reference, entity.location()),
        })
        .filter(|n| n.distance_km <= max_distance_km)
        .collect();

    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    nearby
}

/// Candidates within `max_distance_km` of `reference`, nearest first
pub fn nearby_within<'a, T: Located>(
    reference: GeoPoint,
    candidates: &'a [T],
    max_distance_km: f64,
) -> Vec<&'a T> {
    nearby_with_distance(reference, candidates, max_distance_km)
        .into_iter()
        .map(|n| n.entity)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Site {
        name: &'static str,
        location: GeoPoint,
    }

    impl Located for Site {
        fn location(&self) -> GeoPoint {
            self.location
        }
    }

    fn site(name: &'static str, latitude: f64, longitude: f64) -> Site {
        Site { name, location: GeoPoint { latitude, longitude } }
    }

    fn reference() -> GeoPoint {
        GeoPoint { latitude: 19.076, longitude: 72.877 }
    }

    #[test]
    fn test_filters_and_sorts_by_distance() {
        let sites = vec![
            site("far", 19.30, 72.877),   // ~25 km
            site("mid", 19.086, 72.887),  // ~1.5 km
            site("near", 19.077, 72.877), // ~0.1 km
        ];

        let result = nearby_within(reference(), &sites, DEFAULT_RADIUS_KM);
        let names: Vec<_> = result.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["near", "mid"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let sites = vec![
            site("first", 19.080, 72.877),
            site("second", 19.080, 72.877),
        ];

        let result = nearby_within(reference(), &sites, 5.0);
        assert_eq!(result[0].name, "first");
        assert_eq!(result[1].name, "second");
    }

    #[test]
    fn test_radius_is_inclusive() {
        let sites = vec![site("here", 19.076, 72.877)];
        assert_eq!(nearby_within(reference(), &sites, 0.0).len(), 1);
    }

    #[test]
    fn test_empty_candidates() {
        let sites: Vec<Site> = vec![];
        assert!(nearby_within(reference(), &sites, DEFAULT_RADIUS_KM).is_empty());
    }

    #[test]
    fn test_distances_reported() {
        let sites = vec![site("mid", 19.086, 72.887)];
        let result = nearby_with_distance(reference(), &sites, DEFAULT_RADIUS_KM);
        assert!((result[0].distance_km - 1.53).abs() < 0.01);
    }
}
