//! HTTP API module for the Shift Payroll Engine.
//!
//! This module provides the REST endpoint that prices a schedule of
//! shift records for an hourly wage.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ShiftRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
