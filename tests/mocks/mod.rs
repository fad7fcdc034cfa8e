//! Shared mocks and fixtures for integration tests

pub mod carriers;
pub mod fixtures;
pub mod ups_server;
