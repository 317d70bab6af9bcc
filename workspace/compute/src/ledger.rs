pub mod metrics;
pub mod projection;
pub mod reconcile;

/// Id prefix marking a virtual pending projection.
///
/// The prefix is deterministic per definition, which is what makes
/// recomputing projections idempotent: the reconciler can drop every prior
/// projection wholesale and re-insert the fresh set.
pub const PENDING_ID_PREFIX: &str = "pending-";

/// Deterministic id for the virtual entry projected from a definition.
pub fn pending_id(definition_id: &str) -> String {
    format!("{PENDING_ID_PREFIX}{definition_id}")
}
