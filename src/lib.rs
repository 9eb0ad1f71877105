//! Shift Tracker
//!
//! This crate records work shifts against projects and computes what each
//! shift pays and what a month of shifts adds up to. Pay follows a fixed
//! precedence: a manual amount, then the project's hourly rate, then its
//! fixed per-shift pay.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod models;
pub mod store;
pub mod tracker;
