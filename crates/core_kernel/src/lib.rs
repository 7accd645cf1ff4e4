//! Core Kernel - Foundational types for the theater statement engine
//!
//! This crate provides the building blocks shared by the domain and interface crates:
//! - Money types with precise decimal arithmetic
//! - Locale-aware money formatting behind the `MoneyFormat` capability
//! - Strongly-typed identifiers

pub mod money;
pub mod format;
pub mod identifiers;

pub use money::{Money, Currency, MoneyError};
pub use format::{MoneyFormat, LocaleFormat};
pub use identifiers::PlayId;
