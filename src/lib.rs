//! Pushover: send push notifications from the command line.
//!
//! A library for composing notification messages from configuration
//! presets and delivering them to the Pushover message API.

pub mod api;
pub mod config;
pub mod message;
pub mod options;
