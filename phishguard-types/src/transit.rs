//! Mock route generation and ranking for the transit planner demo.
//!
//! There is no routing engine behind this. Each planning request draws one
//! route option per transport mode from fixed per-mode numeric ranges,
//! sorts the set by total duration and forgets it on the next request.
//! Free-text place names are never geocoded; start and end are "resolved"
//! by jittering a fixed city-center coordinate.

use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// Bengaluru city center. All synthetic coordinates are derived from it.
pub const CITY_CENTER: GeoPoint = GeoPoint {
    lat: 12.9716,
    lon: 77.5946,
};

/// Spread (in degrees) applied when resolving a place name to a point.
pub const LOCATION_SPREAD: f64 = 0.05;

/// Spread (in degrees) applied to live vehicle positions around their base.
pub const VEHICLE_SPREAD: f64 = 0.1;

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Returns a copy displaced by up to ±spread/2 on both axes.
    pub fn jittered(self, spread: f64, rng: &mut impl Rng) -> GeoPoint {
        GeoPoint {
            lat: self.lat + (rng.random::<f64>() - 0.5) * spread,
            lon: self.lon + (rng.random::<f64>() - 0.5) * spread,
        }
    }

    fn offset(self, delta: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + delta,
            lon: self.lon + delta,
        }
    }
}

/// The closed set of route categories. One option per mode is generated on
/// every planning request, in this declaration order.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum TransportMode {
    Bus,
    Metro,
    Mixed,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] =
        [TransportMode::Bus, TransportMode::Metro, TransportMode::Mixed];

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Bus => "BMTC Bus Route",
            TransportMode::Metro => "Namma Metro",
            TransportMode::Mixed => "Metro + Bus",
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            TransportMode::Bus => "Route 356E → Route 201",
            TransportMode::Metro => "Purple Line",
            TransportMode::Mixed => "Metro to MG Road → Bus 201",
        }
    }

    /// Total journey duration in minutes, end-exclusive.
    pub fn duration_range(&self) -> std::ops::Range<u32> {
        match self {
            TransportMode::Bus => 25..45,
            TransportMode::Metro => 18..33,
            TransportMode::Mixed => 22..40,
        }
    }

    pub fn walk_range(&self) -> std::ops::Range<u32> {
        match self {
            TransportMode::Bus => 3..8,
            TransportMode::Metro => 5..13,
            TransportMode::Mixed => 4..10,
        }
    }

    pub fn wait_range(&self) -> std::ops::Range<u32> {
        match self {
            TransportMode::Bus => 2..10,
            TransportMode::Metro => 2..6,
            TransportMode::Mixed => 3..9,
        }
    }

    /// Metro reliability is a fixed 95%; the others vary per request.
    pub fn reliability_range(&self) -> std::ops::Range<u32> {
        match self {
            TransportMode::Bus => 75..95,
            TransportMode::Metro => 95..96,
            TransportMode::Mixed => 80..95,
        }
    }

    pub fn cost_rupees(&self) -> u32 {
        match self {
            TransportMode::Bus => 15,
            TransportMode::Metro => 25,
            TransportMode::Mixed => 30,
        }
    }

    /// Degree offset of the single display waypoint between start and end.
    fn waypoint_offset(&self) -> f64 {
        match self {
            TransportMode::Bus => 0.01,
            TransportMode::Metro => 0.005,
            TransportMode::Mixed => 0.008,
        }
    }
}

/// A displayable travel alternative. Regenerated from scratch on every
/// planning request; never persisted.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RouteOption {
    pub mode: TransportMode,
    pub duration_min: u32,
    pub walk_min: u32,
    pub wait_min: u32,
    pub cost_rupees: u32,
    pub reliability_pct: u32,
    /// Start, one waypoint, end. Display only.
    pub path: Vec<GeoPoint>,
}

impl RouteOption {
    /// Minutes spent on the vehicle itself. The generator does not enforce
    /// walk + wait <= duration, so this saturates rather than underflows.
    pub fn ride_min(&self) -> u32 {
        self.duration_min.saturating_sub(self.walk_min + self.wait_min)
    }
}

/// The free-text planning request. Non-emptiness is the only validation the
/// planner performs; unknown place names produce routes all the same.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct JourneyQuery {
    pub start: String,
    pub end: String,
}

impl JourneyQuery {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// True when both endpoints are non-empty after trimming whitespace.
    pub fn is_complete(&self) -> bool {
        !self.start.trim().is_empty() && !self.end.trim().is_empty()
    }
}

/// Result of one planning request. `options` is sorted ascending by
/// duration; index 0 is the default selection.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct JourneyPlan {
    pub start_point: GeoPoint,
    pub end_point: GeoPoint,
    pub options: Vec<RouteOption>,
}

impl JourneyPlan {
    pub fn fastest(&self) -> Option<&RouteOption> {
        self.options.first()
    }

    /// Minutes the fastest option saves over the runner-up.
    pub fn fastest_margin_min(&self) -> Option<u32> {
        match self.options.as_slice() {
            [first, second, ..] => Some(second.duration_min - first.duration_min),
            _ => None,
        }
    }
}

fn generate_option(
    mode: TransportMode,
    start: GeoPoint,
    end: GeoPoint,
    rng: &mut impl Rng,
) -> RouteOption {
    RouteOption {
        mode,
        duration_min: rng.random_range(mode.duration_range()),
        walk_min: rng.random_range(mode.walk_range()),
        wait_min: rng.random_range(mode.wait_range()),
        cost_rupees: mode.cost_rupees(),
        reliability_pct: rng.random_range(mode.reliability_range()),
        path: vec![start, start.offset(mode.waypoint_offset()), end],
    }
}

/// Produces exactly one route option per transport mode and ranks them
/// fastest-first. The sort is stable, so equal durations keep generation
/// order. Callers are expected to check [`JourneyQuery::is_complete`]
/// before invoking; the generator itself accepts any strings.
pub fn plan_journey(query: &JourneyQuery, rng: &mut impl Rng) -> JourneyPlan {
    let _ = query; // place names are display-only; no geocoding exists
    let start_point = CITY_CENTER.jittered(LOCATION_SPREAD, rng);
    let end_point = CITY_CENTER.jittered(LOCATION_SPREAD, rng);

    let mut options: Vec<RouteOption> = TransportMode::ALL
        .into_iter()
        .map(|mode| generate_option(mode, start_point, end_point, rng))
        .collect();
    options.sort_by_key(|option| option.duration_min);

    JourneyPlan {
        start_point,
        end_point,
        options,
    }
}

/// A fixed metro station for the map overlay.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct MetroStation {
    pub name: &'static str,
    pub position: GeoPoint,
}

pub const METRO_STATIONS: [MetroStation; 6] = [
    MetroStation {
        name: "Majestic",
        position: GeoPoint { lat: 12.9766, lon: 77.5993 },
    },
    MetroStation {
        name: "Chickpet",
        position: GeoPoint { lat: 12.9698, lon: 77.5925 },
    },
    MetroStation {
        name: "KR Market",
        position: GeoPoint { lat: 12.9597, lon: 77.5847 },
    },
    MetroStation {
        name: "MG Road",
        position: GeoPoint { lat: 12.9759, lon: 77.6068 },
    },
    MetroStation {
        name: "Cubbon Park",
        position: GeoPoint { lat: 12.9698, lon: 77.5925 },
    },
    MetroStation {
        name: "Indiranagar",
        position: GeoPoint { lat: 12.9784, lon: 77.6408 },
    },
];

/// A simulated live bus position.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct VehiclePosition {
    pub id: &'static str,
    pub route: &'static str,
    pub position: GeoPoint,
}

const VEHICLE_BASES: [(&str, &str, GeoPoint); 3] = [
    ("BUS001", "Route 356E", GeoPoint { lat: 12.9716, lon: 77.5946 }),
    ("BUS002", "Route 201", GeoPoint { lat: 12.9800, lon: 77.6000 }),
    ("BUS003", "Route 500DA", GeoPoint { lat: 12.9650, lon: 77.5900 }),
];

/// Regenerates the full vehicle list by jittering each bus around its base
/// point. Each tick replaces the previous list wholesale; there is no
/// smoothing between ticks and no road geometry to stay on.
pub fn simulate_vehicle_positions(rng: &mut impl Rng) -> Vec<VehiclePosition> {
    VEHICLE_BASES
        .into_iter()
        .map(|(id, route, base)| VehiclePosition {
            id,
            route,
            position: base.jittered(VEHICLE_SPREAD, rng),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn query() -> JourneyQuery {
        JourneyQuery::new("Majestic", "Indiranagar")
    }

    #[test]
    fn plan_contains_one_option_per_mode() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let plan = plan_journey(&query(), &mut rng);
            assert_eq!(plan.options.len(), 3);
            for mode in TransportMode::ALL {
                assert_eq!(
                    plan.options.iter().filter(|o| o.mode == mode).count(),
                    1,
                    "expected exactly one {mode} option"
                );
            }
        }
    }

    #[test]
    fn plan_is_sorted_fastest_first() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let plan = plan_journey(&query(), &mut rng);
            let durations: Vec<u32> = plan.options.iter().map(|o| o.duration_min).collect();
            let mut sorted = durations.clone();
            sorted.sort();
            assert_eq!(durations, sorted);

            let min = durations.iter().min().copied();
            assert_eq!(plan.fastest().map(|o| o.duration_min), min);
        }
    }

    #[test]
    fn generated_fields_stay_within_mode_ranges() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..500 {
            let plan = plan_journey(&query(), &mut rng);
            for option in &plan.options {
                let mode = option.mode;
                assert!(mode.duration_range().contains(&option.duration_min));
                assert!(mode.walk_range().contains(&option.walk_min));
                assert!(mode.wait_range().contains(&option.wait_min));
                assert!(mode.reliability_range().contains(&option.reliability_pct));
                assert_eq!(option.cost_rupees, mode.cost_rupees());
            }
        }
    }

    #[test]
    fn metro_reliability_is_fixed() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let plan = plan_journey(&query(), &mut rng);
            let metro = plan
                .options
                .iter()
                .find(|o| o.mode == TransportMode::Metro)
                .unwrap();
            assert_eq!(metro.reliability_pct, 95);
        }
    }

    #[test]
    fn path_runs_from_resolved_start_to_resolved_end() {
        let mut rng = StdRng::seed_from_u64(3);
        let plan = plan_journey(&query(), &mut rng);
        for option in &plan.options {
            assert_eq!(option.path.len(), 3);
            assert_eq!(option.path[0], plan.start_point);
            assert_eq!(option.path[2], plan.end_point);
        }
    }

    #[test]
    fn resolved_points_stay_near_city_center() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let plan = plan_journey(&query(), &mut rng);
            for point in [plan.start_point, plan.end_point] {
                assert!((point.lat - CITY_CENTER.lat).abs() <= LOCATION_SPREAD / 2.0);
                assert!((point.lon - CITY_CENTER.lon).abs() <= LOCATION_SPREAD / 2.0);
            }
        }
    }

    #[test]
    fn fastest_margin_is_runner_up_difference() {
        let mut rng = StdRng::seed_from_u64(21);
        let plan = plan_journey(&query(), &mut rng);
        let margin = plan.fastest_margin_min().unwrap();
        assert_eq!(
            margin,
            plan.options[1].duration_min - plan.options[0].duration_min
        );
    }

    #[test]
    fn incomplete_queries_are_rejected_by_validation() {
        assert!(!JourneyQuery::new("", "Indiranagar").is_complete());
        assert!(!JourneyQuery::new("Majestic", "").is_complete());
        assert!(!JourneyQuery::new("   ", "Indiranagar").is_complete());
        assert!(!JourneyQuery::new("Majestic", "\t\n").is_complete());
        assert!(JourneyQuery::new("Majestic", "Indiranagar").is_complete());
    }

    #[test]
    fn ride_minutes_never_underflow() {
        // The ranges allow walk + wait to exceed the total duration; the
        // derived ride time must clamp to zero in that case.
        let option = RouteOption {
            mode: TransportMode::Metro,
            duration_min: 18,
            walk_min: 12,
            wait_min: 5,
            cost_rupees: 25,
            reliability_pct: 95,
            path: vec![],
        };
        assert_eq!(option.ride_min(), 1);
        let cramped = RouteOption {
            walk_min: 12,
            wait_min: 7,
            ..option
        };
        assert_eq!(cramped.ride_min(), 0);
    }

    #[test]
    fn vehicle_simulation_replaces_all_positions_each_tick() {
        let mut rng = StdRng::seed_from_u64(5);
        let first = simulate_vehicle_positions(&mut rng);
        let second = simulate_vehicle_positions(&mut rng);
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 3);

        let ids: Vec<&str> = first.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec!["BUS001", "BUS002", "BUS003"]);

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.route, b.route);
        }
    }

    #[test]
    fn vehicle_positions_stay_near_their_base() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            for (vehicle, (_, _, base)) in
                simulate_vehicle_positions(&mut rng).iter().zip(VEHICLE_BASES)
            {
                assert!((vehicle.position.lat - base.lat).abs() <= VEHICLE_SPREAD / 2.0);
                assert!((vehicle.position.lon - base.lon).abs() <= VEHICLE_SPREAD / 2.0);
            }
        }
    }
}
