pub mod dto;
pub mod error;
pub mod query;
pub mod services;

pub use error::ServiceError;
