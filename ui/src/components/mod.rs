pub mod action_link;
pub mod empty_state;
pub mod pico;
pub mod risk_meter;
pub mod route_planner;
pub mod route_recommendations;
pub mod stat_card;
pub mod transport_map;
