//! Hospital shift calendar
//!
//! This crate lays out staff shifts on a Sunday-first month grid, packing
//! overlapping shifts into lanes week by week, and serves the result next to
//! role-gated department administration over a small HTTP API.

#![warn(missing_docs)]

pub mod access;
pub mod api;
pub mod backend;
pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod services;
