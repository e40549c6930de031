//! Vehicle source implementations

pub mod in_memory;
pub mod json;

pub use in_memory::InMemoryVehicleSource;
pub use json::JsonVehicleSource;
