pub mod memory;
pub mod model;
pub mod repository;
pub mod routes;

pub use routes::get_router;
