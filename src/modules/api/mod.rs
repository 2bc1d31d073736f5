pub mod controller;
pub mod error;
pub mod routes;
pub mod schema;

pub use error::ApiError;
pub use routes::api_routes;
