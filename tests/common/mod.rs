//! Common test utilities for bivarmap.
//!
//! This module provides shared utilities for testing the classifier and server.

#![allow(dead_code)]

pub mod assertions;
pub mod http_client;
pub mod test_data;
