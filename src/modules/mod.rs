pub mod kitchen;
pub mod recipe;

mod router;
pub use router::get_router;
