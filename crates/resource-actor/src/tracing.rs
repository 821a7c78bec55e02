//! # Observability & Tracing
//!
//! Every collection logs its lifecycle (`Actor started`, `Shutdown`) and each
//! request it serves with the `entity_type` field set to the short type name, so
//! a single `RUST_LOG` filter covers products, categories and legacy sources.
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per write
//! RUST_LOG=debug cargo run     # payloads and reads as well
//! RUST_LOG=softcatalog=debug,resource_actor=warn cargo run
//! ```
//!
//! Best-effort side effects that fail (counter adjustments, view increments,
//! unreachable legacy sources) surface here at `WARN` and nowhere else.

/// Initializes the global subscriber from `RUST_LOG`.
///
/// Uses the compact format without module targets. Call once per process.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
