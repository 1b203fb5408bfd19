// ABOUTME: Ingredient intelligence for the Morizo meal planner
// ABOUTME: Pure, synchronous matching logic with no I/O, shared by the web handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

#![deny(unsafe_code)]

//! # Morizo Intelligence
//!
//! Ingredient analysis used by the Morizo web server. Everything in this
//! crate is a pure function of its inputs, so it is safe to call from any
//! number of request handlers at once.
//!
//! ## Modules
//!
//! - **ingredients**: name normalization, staple denylist, and missing-ingredient detection

/// Missing-ingredient detection against the user's pantry
pub mod ingredients;
