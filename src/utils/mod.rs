pub mod error;
pub mod logger;
pub mod sequence;
pub mod validation;
