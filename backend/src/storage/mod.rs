//! # Storage Module
//!
//! Handles all data persistence for the people service.
//!
//! The store is a SQLite database accessed through SQLx. `DbConnection` owns the
//! connection pool and the schema; each repository wraps a cloned connection and
//! exposes the queries one entity needs. Every call acquires a pooled connection for
//! its unit of work and releases it when the query future completes.
//!
//! ## Tables
//!
//! - **persons**: self-referencing hierarchy (`parent` → `persons.id`)
//! - **families** / **family_members**: many-to-many association; member rows
//!   cascade when their person is deleted or renumbered
//! - **exercises**: flat activity log
//!
//! `has_children` is never stored. It is derived from the `parent` column whenever a
//! person is read.

pub mod connection;
pub mod repositories;

pub use connection::DbConnection;
pub use repositories::{ExerciseRepository, FamilyRepository, PersonRepository, SeedRepository};
