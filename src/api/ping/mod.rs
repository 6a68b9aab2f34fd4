pub mod handler;
pub mod routes;
pub mod service;

pub use routes::ping_routes;
pub use service::PingService;
