//! Unit tests for the task module.
//!
//! Tests are organised by layer: the status transition table, the aggregate
//! and its notification intents, and the service with its actor gating.

mod status_tests;
