pub mod errors;
pub mod fs;

pub use errors::DashboardError;
pub use fs::write_atomic;
