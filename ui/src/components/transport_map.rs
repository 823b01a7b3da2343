use crate::components::pico::Card;
use dioxus::prelude::*;
use phishguard_types::transit::GeoPoint;
use phishguard_types::transit::JourneyPlan;
use phishguard_types::transit::TransportMode;
use phishguard_types::transit::CITY_CENTER;
use phishguard_types::transit::METRO_STATIONS;

const MAP_WIDTH: f64 = 600.0;
const MAP_HEIGHT: f64 = 420.0;

/// Degrees of latitude/longitude the map spans. Wide enough that jittered
/// vehicle positions (±0.05°) never leave the frame.
const MAP_SPAN: f64 = 0.16;

/// Equirectangular projection onto the SVG viewbox, north up.
fn project(point: GeoPoint) -> (f64, f64) {
    let x = (point.lon - (CITY_CENTER.lon - MAP_SPAN / 2.0)) / MAP_SPAN * MAP_WIDTH;
    let y = (1.0 - (point.lat - (CITY_CENTER.lat - MAP_SPAN / 2.0)) / MAP_SPAN) * MAP_HEIGHT;
    (x, y)
}

fn route_color(mode: TransportMode) -> &'static str {
    match mode {
        TransportMode::Bus => "#2563eb",
        TransportMode::Metro => "#10b981",
        TransportMode::Mixed => "#8b5cf6",
    }
}

/// The live city map: fixed metro stations, simulated buses refreshed every
/// few seconds, and the currently selected route drawn on top.
#[component]
pub fn TransportMap(
    plan: ReadOnlySignal<Option<JourneyPlan>>,
    selected: ReadOnlySignal<Option<usize>>,
) -> Element {
    let vehicles = use_resource(move || async move { api::vehicle_positions().await });

    // Periodic refresh; each tick replaces the vehicle list wholesale.
    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let mut res = vehicles;
        async move {
            loop {
                api::latency::simulate(api::latency::VEHICLE_TICK).await;
                res.restart();
            }
        }
    });

    let selected_route = plan.read().as_ref().and_then(|p| {
        let index = selected().unwrap_or(0);
        p.options.get(index).cloned()
    });
    let endpoints = plan
        .read()
        .as_ref()
        .map(|p| (p.start_point, p.end_point));

    rsx! {
        Card {
            h3 { "Live Transport Map" }
            svg {
                view_box: "0 0 {MAP_WIDTH} {MAP_HEIGHT}",
                width: "100%",
                style: "background-color: var(--pico-card-sectioning-background-color);
                        border-radius: var(--pico-border-radius);",

                // Metro stations are fixed landmarks.
                for station in METRO_STATIONS {
                    {
                        let (x, y) = project(station.position);
                        let label_y = y - 10.0;
                        rsx! {
                            circle {
                                cx: "{x}",
                                cy: "{y}",
                                r: "6",
                                fill: "#10b981",
                                stroke: "white",
                                stroke_width: "2",
                            }
                            text {
                                x: "{x}",
                                y: "{label_y}",
                                text_anchor: "middle",
                                font_size: "11",
                                fill: "var(--pico-color)",
                                "{station.name}"
                            }
                        }
                    }
                }

                // Selected route and its endpoints, when a plan exists.
                if let Some(route) = &selected_route {
                    {
                        let color = route_color(route.mode);
                        let points = route
                            .path
                            .iter()
                            .map(|p| {
                                let (x, y) = project(*p);
                                format!("{x:.1},{y:.1}")
                            })
                            .collect::<Vec<_>>()
                            .join(" ");
                        rsx! {
                            polyline {
                                points: "{points}",
                                fill: "none",
                                stroke: "{color}",
                                stroke_width: "4",
                                stroke_dasharray: "8 4",
                                stroke_linecap: "round",
                            }
                        }
                    }
                }
                if let Some((start, end)) = endpoints {
                    {
                        let (sx, sy) = project(start);
                        let (ex, ey) = project(end);
                        rsx! {
                            circle { cx: "{sx}", cy: "{sy}", r: "8", fill: "#16a34a" }
                            circle { cx: "{ex}", cy: "{ey}", r: "8", fill: "#dc2626" }
                        }
                    }
                }

                // Live buses; absent until the first fetch resolves.
                if let Some(Ok(buses)) = &*vehicles.read() {
                    for bus in buses.clone() {
                        {
                            let (x, y) = project(bus.position);
                            let label_y = y + 4.0;
                            rsx! {
                                circle {
                                    cx: "{x}",
                                    cy: "{y}",
                                    r: "9",
                                    fill: "#2563eb",
                                    stroke: "white",
                                    stroke_width: "2",
                                }
                                text {
                                    x: "{x}",
                                    y: "{label_y}",
                                    text_anchor: "middle",
                                    font_size: "9",
                                    fill: "white",
                                    "🚌"
                                }
                            }
                        }
                    }
                }
            }
            div {
                style: "display: flex; gap: 1.5rem; margin-top: 0.5rem;",
                small { "🟢 Metro Station" }
                small { "🔵 Live Bus" }
                small { "🟢→🔴 Your Journey" }
            }
        }
    }
}
