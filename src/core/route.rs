use crate::core::distance::distance_km;
use crate::models::{GeoPoint, Located};

/// Order `stops` into a visiting sequence using the nearest-neighbor heuristic
///
/// Starting at `start`, repeatedly visit the closest unvisited stop. Ties go
/// to the stop that appears first in `stops`. The result is a permutation of
/// the input. O(n²), which is fine for the tens of pickups a route holds.
pub fn sequence_route<'a, T: Located>(start: GeoPoint, stops: &'a [T]) -> Vec<&'a T> {
    let mut visited = vec![false; stops.len()];
    let mut route = Vec::with_capacity(stops.len());
    let mut current = start;

    while route.len() < stops.len() {
        let mut nearest: Option<(usize, f64)> = None;

        for (idx, stop) in stops.iter().enumerate() {
            if visited[idx] {
                continue;
            }
            let distance = distance_km(current, stop.location());
            match nearest {
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((idx, distance)),
            }
        }

        // Unreachable while unvisited stops remain
        let Some((idx, _)) = nearest else { break };

        visited[idx] = true;
        current = stops[idx].location();
        route.push(&stops[idx]);
    }

    route
}

/// Total length of the legs from `start` through `sequence` in order
pub fn route_length_km<T: Located>(start: GeoPoint, sequence: &[T]) -> f64 {
    sequence
        .iter()
        .fold((start, 0.0), |(from, total), stop| {
            let to = stop.location();
            (to, total + distance_km(from, to))
        })
        .1
}
