//! Shared test utilities for the Muelle workspace.
//!
//! Provides the `TestBuilder` for declarative in-memory SQLite test setup
//! and the `factory` module of fixture insert helpers used across unit and
//! integration tests.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
