//! Server-side models that are not part of the domain layer.

pub mod config;
