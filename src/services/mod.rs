pub mod loadgen;
pub mod metrics;
