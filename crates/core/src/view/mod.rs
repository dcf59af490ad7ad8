pub mod chart;
pub mod entity;
pub mod error;
pub mod port;
