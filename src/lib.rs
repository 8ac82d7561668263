//! lofi-journey: Low-fidelity wireframes of a fan-app user journey.

pub mod error;
pub mod hash;
pub mod host;
pub mod journey;
pub mod layout;
pub mod report;
pub mod screens;
pub mod spec;
pub mod svg;
pub mod theme;
pub mod types;
pub mod validate;
