//! Application layer
//!
//! Use cases wiring the domain to the interface layer.

pub mod use_cases;
