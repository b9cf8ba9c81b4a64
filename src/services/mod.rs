//! Business logic: fetch cycles, chart rendering and scheduling
//!
//! Each producer exposes a plain `run_cycle` async fn so tests can drive a
//! single cycle directly; `scheduler::spawn_periodic` wires cycles onto
//! independent wall-clock timers in production.

pub mod chart;
pub mod scheduler;
pub mod screenshot;
pub mod stocks;
pub mod weather;

pub use scheduler::spawn_periodic;
pub use screenshot::ScreenshotService;
pub use stocks::StockService;
pub use weather::{CityCursor, WeatherService};
