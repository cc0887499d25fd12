//! Domain layer for the Savory plugin.
//!
//! Core types independent of Zellij APIs and of the transport: the dishes the
//! backend returns, the filters a search is narrowed with, the backend health
//! tri-state and the crate error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`dish`]: Dish model and display bands
//! - [`filters`]: Filter set and result count selector
//! - [`health`]: Backend health tri-state

pub mod dish;
pub mod error;
pub mod filters;
pub mod health;

pub use dish::{CalorieBand, Dish, DishId, ScoreBand};
pub use error::{Result, SavoryError};
pub use filters::{FilterSet, FilterValue, ResultCount};
pub use health::HealthStatus;
