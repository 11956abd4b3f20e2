//! Span definitions per operation: finalization, selection, label propagation.

/// Create a cluster finalization span.
#[macro_export]
macro_rules! finalize_span {
    ($cluster_size:expr, $unknown_counter:expr) => {
        tracing::debug_span!(
            "sieve.finalize",
            cluster_size = $cluster_size,
            unknown_counter = $unknown_counter
        )
    };
}

/// Create a selection span.
#[macro_export]
macro_rules! selection_span {
    ($mode:expr, $count:expr, $excluded:expr) => {
        tracing::debug_span!("sieve.selection", mode = %$mode, count = $count, excluded = $excluded)
    };
}

/// Create a label propagation span.
#[macro_export]
macro_rules! propagation_span {
    ($session_id:expr, $cluster_size:expr) => {
        tracing::info_span!(
            "sieve.propagation",
            session_id = $session_id,
            cluster_size = $cluster_size
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const FINALIZE: &str = "sieve.finalize";
    pub const SELECTION: &str = "sieve.selection";
    pub const PROPAGATION: &str = "sieve.propagation";
}
