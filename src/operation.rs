//! Reversible inventory operations
//!
//! Every change to an [`Item`] goes through one of these variants. `apply` and
//! `reverse` take the same amount, so the history only has to remember what was
//! passed in. Relocate and Reprice keep the value they overwrote inside the
//! variant; that saved value is single-use and is taken back out on reverse.
use super::error::OperationError;
use super::item::{Item, Location};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use std::fmt;

#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    #[n(0)]
    AddStock,
    #[n(1)]
    RemoveStock,
    #[n(2)]
    Relocate,
    #[n(3)]
    Reprice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    AddStock,
    RemoveStock,
    Relocate {
        target: Location,
        previous: Option<Location>, // filled on apply
    },
    Reprice {
        previous: Option<Decimal>, // filled on apply
    },
}

impl Operation {
    pub fn add_stock() -> Self {
        Operation::AddStock
    }
    pub fn remove_stock() -> Self {
        Operation::RemoveStock
    }
    pub fn relocate(target: Location) -> Self {
        Operation::Relocate {
            target,
            previous: None,
        }
    }
    pub fn reprice() -> Self {
        Operation::Reprice { previous: None }
    }
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::AddStock => OperationKind::AddStock,
            Operation::RemoveStock => OperationKind::RemoveStock,
            Operation::Relocate { .. } => OperationKind::Relocate,
            Operation::Reprice { .. } => OperationKind::Reprice,
        }
    }

    /// Mutate `item` according to this operation.
    ///
    /// Stock amounts are truncated toward zero before use; reprice amounts are
    /// added exactly. Relocate ignores `amount`.
    pub fn apply(&mut self, item: &mut Item, amount: Decimal) -> Result<(), OperationError> {
        match self {
            Operation::AddStock => {
                let quantity = shift_quantity(item.quantity(), amount, i64::checked_add)?;
                item.set_quantity(quantity);
            }
            Operation::RemoveStock => {
                let quantity = shift_quantity(item.quantity(), amount, i64::checked_sub)?;
                item.set_quantity(quantity);
            }
            Operation::Relocate { target, previous } => {
                *previous = Some(item.location().clone());
                item.set_location(target.clone());
            }
            Operation::Reprice { previous } => {
                let price = item
                    .price()
                    .checked_add(amount)
                    .ok_or(OperationError::AmountOutOfRange(amount))?;
                *previous = Some(item.price());
                item.set_price(price);
            }
        }
        Ok(())
    }

    /// Undo a previous `apply` made with the same `amount`.
    ///
    /// Relocate and Reprice restore the value saved by `apply` and ignore
    /// `amount`. Reversing them without a prior apply is rejected with
    /// [`OperationError::NotApplied`] and leaves the item untouched.
    pub fn reverse(&mut self, item: &mut Item, amount: Decimal) -> Result<(), OperationError> {
        let kind = self.kind();
        match self {
            Operation::AddStock => {
                let quantity = shift_quantity(item.quantity(), amount, i64::checked_sub)?;
                item.set_quantity(quantity);
            }
            Operation::RemoveStock => {
                let quantity = shift_quantity(item.quantity(), amount, i64::checked_add)?;
                item.set_quantity(quantity);
            }
            Operation::Relocate { previous, .. } => {
                let location = previous.take().ok_or(OperationError::NotApplied(kind))?;
                item.set_location(location);
            }
            Operation::Reprice { previous } => {
                let price = previous.take().ok_or(OperationError::NotApplied(kind))?;
                item.set_price(price);
            }
        }
        Ok(())
    }
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::AddStock => "add stock",
            OperationKind::RemoveStock => "remove stock",
            OperationKind::Relocate => "relocate",
            OperationKind::Reprice => "reprice",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer part of `amount`, rounding toward zero.
pub fn truncate(amount: Decimal) -> Result<i64, OperationError> {
    amount
        .trunc()
        .to_i64()
        .ok_or(OperationError::AmountOutOfRange(amount))
}

fn shift_quantity(
    quantity: i64,
    amount: Decimal,
    op: fn(i64, i64) -> Option<i64>,
) -> Result<i64, OperationError> {
    op(quantity, truncate(amount)?).ok_or(OperationError::AmountOutOfRange(amount))
}
