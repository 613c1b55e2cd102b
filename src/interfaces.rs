//! Interface layer
//!
//! Entry points through which the outside world reaches the hub.

pub mod web;
