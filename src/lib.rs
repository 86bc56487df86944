// Copyright 2026 Callbridge Contributors
// SPDX-License-Identifier: Apache-2.0

//! Callbridge client library.
//!
//! Talks to a single remote endpoint that supports exactly two
//! interaction styles: a callback-bridge (JSONP-style) read, used
//! because the endpoint does not permit ordinary cross-origin reads,
//! and an opaque fire-and-forget POST write. Outcomes render into one
//! display sink.

pub mod actions;
pub mod bridge;
pub mod cli;
pub mod error;
pub mod loader;
pub mod poster;
pub mod sink;
