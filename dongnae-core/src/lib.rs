//! Core types for the dongnae ecosystem.
//!
//! This crate provides the data pipeline shared by the CLI:
//! - `program` for schedule records and load-time classification
//! - `occurrence` for date expansion and grouping
//! - `filter` and `favorites` for narrowing what gets rendered
//! - `org` for the organization directory

pub mod constants;
pub mod dongnae;
pub mod dongnae_config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod month;
pub mod occurrence;
pub mod org;
pub mod program;
