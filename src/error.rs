use super::actor::Role;
use super::item::Location;
use super::operation::OperationKind;
use rust_decimal::Decimal;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("{actor} ({role}) is not allowed to perform {kind}")]
    AuthorizationDenied {
        actor: String,
        role: Role,
        kind: OperationKind,
    },
    #[error("nothing to undo")]
    EmptyHistory,
    #[error("storage location '{0}' is not known to this ledger")]
    UnknownLocation(Location),
    #[error("item is borrowed elsewhere and cannot be changed right now")]
    ItemBusy,
    #[error("failed to issue receipt: {0}")]
    Receipt(String),
    #[error(transparent)]
    Operation(#[from] OperationError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("{0} cannot be reversed before it has been applied")]
    NotApplied(OperationKind),
    #[error("amount {0} is out of range for this item")]
    AmountOutOfRange(Decimal),
    #[error("invalid storage location name: {0:?}")]
    InvalidLocation(String),
}
