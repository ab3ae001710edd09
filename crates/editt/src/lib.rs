//! Underwriting core for the EDITT loan insurance product.
//!
//! The pure scoring, banding, and default claim functions live in [`underwriting`]; the
//! remaining modules carry configuration, telemetry, and the application error surface used
//! by the API service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod underwriting;
