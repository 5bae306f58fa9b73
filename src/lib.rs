#![doc(test(attr(deny(warnings))))]

//! Gym Core models a single gym's back office: client registration, session
//! scheduling, validated enrollment, party balances and notification fan-out.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod utils;

pub use errors::{GymError, GymResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Gym Core tracing initialized.");
    });
}
