//! # FundSpark Backend
//!
//! REST backend for managing startup profiles, the content describing them,
//! and investor profiles, plus a rule-based startup analysis report.
//!
//! ## Architecture
//!
//! - [`api`]: Domain records, identifiers and request payloads
//! - [`db`]: Repository traits, the in-memory store and the service layer
//! - [`services`]: Startup analysis
//! - [`config`]: Server configuration from file and environment
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! All state lives in memory and is lost on restart. Running several
//! server processes behind a load balancer gives each its own store.

pub mod api;
pub mod config;
pub mod db;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
