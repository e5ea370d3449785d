pub mod firestore;
pub mod geoip;
pub mod headless_map;
pub mod memory;
pub mod picker;
pub mod presenter;
pub mod session;
pub mod storage;
