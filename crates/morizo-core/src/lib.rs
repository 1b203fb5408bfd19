// ABOUTME: Core types and constants for the Morizo web server
// ABOUTME: Foundation crate with error handling and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

#![deny(unsafe_code)]

//! # Morizo Core
//!
//! Shared types for the Morizo web server. This crate changes rarely, which
//! keeps incremental builds of the server crate fast.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the JSON error body
//! - **constants**: routes, upstream paths, limits and defaults

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;
