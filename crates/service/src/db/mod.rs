//! Database-backed service functions.

pub mod pricing_service;
