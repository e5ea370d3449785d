pub mod feedback;
pub mod geo;
pub mod id;
pub mod map;
pub mod trip;
pub mod user;
