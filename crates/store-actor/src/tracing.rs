//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup and shutdown
//! - **Entity Operations**: Create, Get, List, Update and Delete, with the entity id
//! - **Storage**: loads of a missing file, saves with the resulting collection size
//! - **Errors**: rejected requests at `warn`, storage failures at `error`
//!
//! ## Usage
//!
//! ```bash
//! # Only errors (default when RUST_LOG is unset)
//! cargo run --bin inventory
//!
//! # State changes
//! RUST_LOG=info cargo run --bin inventory
//!
//! # Full payloads and store activity
//! RUST_LOG=debug cargo run --bin inventory
//! ```
//!
//! Logs go to stderr so they never interleave with an interactive program's stdout.

/// Initializes the tracing/logging infrastructure for the application.
///
/// Uses a compact format without module targets (`entity_type` fields identify the actor)
/// and filters via the `RUST_LOG` environment variable.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
