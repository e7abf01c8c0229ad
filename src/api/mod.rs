//! HTTP API module for the child support calculation engine.
//!
//! This module provides the REST endpoint for calculating recommended
//! child support under the 2021 guideline table.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::{AdjustmentRequest, CalculationRequestBody};
pub use response::ApiError;
