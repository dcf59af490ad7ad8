pub mod entity;
pub mod envelope;
pub mod error;
pub mod port;
