//! Membership look-up: checks whether the membership attached to a
//! phone number is still active, and lists the available plans.
//!
//! The controllers are independent from any user interface: they query a [gateway::QueryGateway]
//! and render through view traits implemented by the page.

#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod gateway;
pub mod membership;
pub mod plans;
pub mod tools;

pub use error::Result;
