//! Payrail - Payment Gateway Integration Service
//!
//! This crate connects an e-commerce checkout flow to a hosted payment
//! gateway: it authenticates, opens payment sessions, redirects customers,
//! and reconciles order state from asynchronous webhook notifications.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
