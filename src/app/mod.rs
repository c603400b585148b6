//! Orchestration: wiring the ports together into a runnable pipeline.

pub mod engine;
