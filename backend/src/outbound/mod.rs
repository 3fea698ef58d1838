//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and wire
//! representations. They contain no business logic.
//!
//! - **random_user**: reqwest-backed client for the randomuser generator.

pub mod random_user;
