//! Core types shared across ekernel facilities
//!
//! This crate holds the canonical field keys and event names used by the
//! structured logging macros and the error facility.

pub mod schema;
