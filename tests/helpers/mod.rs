// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the Axum request helper, a fake upstream server, and resource builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
pub mod fake_upstream;
pub mod test_utils;
