//! Vacation and public holiday calculation engine for the German federal states.
//!
//! This crate computes region-specific public holidays (including the movable
//! feasts derived from Easter), counts working days in a date range while
//! excluding weekends and holidays, detects overlapping vacation periods, and
//! derives per-employee vacation balances (allowance − used = remaining).

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
