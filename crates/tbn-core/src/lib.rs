//! # tbn-core
//!
//! Core types, ID generation, and error types for Tankobon.
//!
//! This crate provides the foundational types shared across all Tankobon crates:
//! - Entity structs for the library domain (series, volumes, collections)
//! - Reading status and edition enums
//! - ID prefix constants
//! - ISBN cleanup shared by manual entry and barcode capture
//! - Import row field mapping (alias tables per canonical field)
//! - Cross-cutting error types
//! - Response types returned by the CLI

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod import;
pub mod isbn;
pub mod responses;
