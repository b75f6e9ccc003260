//! Domain model for the exam catalog.
//!
//! # Responsibility
//! - Define the record shapes shared by repositories and services.
//!
//! # Invariants
//! - An exam identifier, once assigned by a store, is never rewritten by core
//!   orchestration.
//! - Questions carry no identity beyond their text and position.

pub mod exam;
