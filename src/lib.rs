//! Staff rota generation and payroll engine for hospitality back offices.
//!
//! This crate assigns weekly shifts to staff subject to headcount targets,
//! off-day quotas, preferred off days and approved leave, and computes
//! attendance-dependent pay (base pay, overtime, night-shift allowance and
//! late penalties) at daily, weekly and monthly scales.

#![warn(missing_docs)]

pub mod api;
pub mod attendance;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod payroll;
pub mod rota;
pub mod store;
