//! # Hero Counters
//!
//! Looks up which heroes counter a chosen hero, ranked by win rate, from a
//! static JSON dataset.
//!
//! ## Architecture
//!
//! - **models**: Hero records, client projections and win-rate parsing
//! - **storage**: Dataset loading with an optional change-aware cache
//! - **lookup**: Name listing and counter resolution
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation
//! - **messages**: User-facing copy

pub mod api;
pub mod config;
pub mod lookup;
pub mod messages;
pub mod models;
pub mod storage;

pub use models::*;
