pub mod command_api;
pub mod routes;

pub use command_api::{configure_routes, health_check};
pub use routes::{route_table, RouteBinding};
