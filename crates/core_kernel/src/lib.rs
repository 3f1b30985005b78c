//! Core Kernel - Foundational types and utilities for the review service
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed entity identifiers
//! - The domain error taxonomy shared by all port implementations
//! - Offset/limit pagination primitives

pub mod error;
pub mod identifiers;
pub mod pagination;
pub mod ports;

pub use error::CoreError;
pub use identifiers::{ReviewId, ReviewedObjectId, ReviewerId};
pub use pagination::{Page, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use ports::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError};
