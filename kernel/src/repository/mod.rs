pub mod blob;
pub mod document;
pub mod feedback;
pub mod geolocation;
pub mod identity;
pub mod image;
pub mod map;
