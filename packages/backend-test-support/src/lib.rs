//! Shared helpers for the deck backend's tests: idempotent test logging and
//! Problem Details assertions that do not depend on backend types.

pub mod logging;
pub mod problem_details;
