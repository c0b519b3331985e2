//! # lf-core
//!
//! Core types, ID generation, and error types for the lost & found board.
//!
//! This crate provides the foundational types shared across all board crates:
//! - Entity structs for items, claims, and contact messages
//! - Status enums with state machine transitions
//! - Validated drafts that turn raw form values into entities
//! - The item filter behind public browsing
//! - The admin session and its capability token
//! - Collaborator traits for confirmation prompts and notifications
//! - Response types for statistics and the admin overview

pub mod drafts;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod feedback;
pub mod filter;
pub mod ids;
pub mod responses;
pub mod session;
