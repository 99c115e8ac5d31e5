//! Core domain types for Safeguard.
//!
//! This crate contains pure domain types with no IO and no async:
//!
//! - [`Stage`] and [`Theme`]: the wizard's screen identity and UI preference
//! - [`TrackingStatus`]: a case's position in the simulated resolution pipeline
//! - [`ScamCase`]: the submitted report plus core-owned tracking metadata
//! - [`ui`]: value types shared by the engine and the TUI (line inputs, options)
//!
//! # Type-Driven Design
//!
//! A [`ScamCase`] is built exactly once from two explicit parts: the externally
//! supplied [`ReportDetails`] and the tracking fields the engine owns. The
//! contact info has no setter and the status can only move forward.

mod case;
mod ids;
mod stage;
mod tracking;
pub mod ui;

pub use case::{Amount, AmountError, ReportDetails, ScamCase, ScamType};
pub use ids::CaseId;
pub use stage::{Stage, Theme, UnknownThemeError};
pub use tracking::TrackingStatus;
