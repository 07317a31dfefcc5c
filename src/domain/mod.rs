//! Domain layer containing business entities and the repository contract.
//!
//! Defines entities and the repository interface independent of
//! infrastructure concerns. Concrete implementations live in
//! [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
