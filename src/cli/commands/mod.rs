//! Command implementations.

pub mod validate;

pub use validate::ValidateCommand;
