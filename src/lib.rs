//! Symple - Menstrual Cycle Tracking Core
//!
//! This crate holds the behaviour shared by the web and mobile shells: the
//! period log and its toggle protocol, next-period prediction, reminder
//! decisions, calendar classification and the stored user profile. Shells
//! stay thin; they render what the application handlers return and forward
//! taps back to them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
