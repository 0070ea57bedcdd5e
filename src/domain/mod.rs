//! Domain records consumed by the users page.

pub mod user;
