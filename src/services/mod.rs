pub mod api;
pub mod scoro;

pub use api::{Endpoint, EntityApi};
pub use scoro::Scoro;
