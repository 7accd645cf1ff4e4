//! Theater Billing Domain
//!
//! This crate prices theater performances and produces customer statements.
//! It is pure domain logic: no I/O, no configuration, no shared state.
//!
//! # Pricing
//!
//! Each performance is priced from its play's genre and its audience size:
//! - **Tragedy**: flat base fee, plus a per-seat charge above the threshold
//! - **Comedy**: base fee, a capacity surcharge above the threshold, and a
//!   per-seat charge for every attendee
//!
//! Every performance also earns volume credits for seats above the credit
//! threshold; comedies earn an extra credit for every five attendees.
//!
//! # Flow
//!
//! ```text
//! Invoice + PlayCatalog -> pricing::price (per performance)
//!                       -> Statement (lines and totals)
//!                       -> StatementRenderer (text)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use core_kernel::LocaleFormat;
//! use domain_theater::{Invoice, Performance, StatementRenderer};
//!
//! let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);
//! let text = StatementRenderer::new(LocaleFormat::en_us()).render(&invoice, &catalog)?;
//! print!("{text}");
//! ```

pub mod play;
pub mod performance;
pub mod invoice;
pub mod catalog;
pub mod pricing;
pub mod statement;
pub mod error;

pub use play::{Play, Genre};
pub use performance::Performance;
pub use invoice::Invoice;
pub use catalog::{PlayCatalog, PlayRecord};
pub use pricing::PerformanceCharge;
pub use statement::{Statement, StatementLine, StatementRenderer};
pub use error::TheaterError;
