//! Shift Payroll Engine for hourly shift workers
//!
//! This crate normalizes raw clock-in/clock-out times into break-adjusted
//! paid time using a fixed break entitlement table, converts paid time and
//! an hourly wage into a rounded salary, and aggregates a month of shifts.
//! An HTTP API exposes the calculation to schedule views.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
