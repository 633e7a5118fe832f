//! Taskforce Library
//!
//! Coordinates a fixed pool of language-model-backed agents: team formation
//! from model responses, an explicit agent lifecycle state machine, and a
//! concurrent execution pass over every assigned agent.

pub mod agents;
pub mod config;
pub mod driver;
pub mod infrastructure;
