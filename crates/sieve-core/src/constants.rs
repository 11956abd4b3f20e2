/// Sieve version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix of the placeholder label given to clusters without a dominant family.
pub const UNKNOWN_CLUSTER_PREFIX: &str = "unknown_";

/// Separator between label and family in the display form of a family key.
pub const FAMILY_KEY_SEPARATOR: &str = "__";

/// Label string used for records that carry no label.
pub const UNKNOWN_LABEL: &str = "unknown";
