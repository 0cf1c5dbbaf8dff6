//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with the roster provider and the
//! system clock without depending on concrete implementations.

pub mod clock_port;
pub mod raw_api_port;

pub use clock_port::ClockPort;
pub use raw_api_port::{ApiError, RawApiPort};

#[cfg(test)]
pub use raw_api_port::MockRawApiPort;
