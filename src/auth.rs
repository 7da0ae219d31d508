//! Authorization checks applied before an operation touches an item
use super::actor::Actor;
use super::error::LedgerError;
use super::operation::OperationKind;

/// Check that `actor` may perform an operation of `kind`.
///
/// - No IO
/// - No mutation
pub fn authorize(actor: &Actor, kind: OperationKind) -> Result<(), LedgerError> {
    if actor.role().can_perform(kind) {
        return Ok(());
    }
    Err(LedgerError::AuthorizationDenied {
        actor: actor.identity().to_string(),
        role: actor.role(),
        kind,
    })
}
