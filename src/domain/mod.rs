//! Domain layer
//!
//! Core records of the application, free of I/O.

pub mod models;
