//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into the operations UI/FFI layers consume.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod recipe_service;
