//! Shared DTOs exchanged between the dealership console and the REST API.

pub mod domain;
pub mod system;
