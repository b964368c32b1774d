//! Application services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Enforce business validation before anything is persisted.

pub mod task_service;
