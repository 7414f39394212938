//! Event access boundary.
//!
//! The analytics core does not own storage; it reads fully materialized
//! event collections from an [`EventStore`] collaborator and treats that
//! read as instantaneous.

pub mod event_store;

pub use event_store::{EventStore, InMemoryEventStore};
