//! Ledger manager: authorizes, applies and records operations
use super::actor::Actor;
use super::auth::authorize;
use super::config::LedgerConfig;
use super::error::LedgerError;
use super::item::{Item, SharedItem};
use super::operation::Operation;
use super::receipt::{Amount, Receipt, TimeStamp};
use super::utils::new_uuid_to_bech32;
use chrono::Utc;
use rust_decimal::Decimal;

struct HistoryEntry {
    receipt: Receipt,
    operation: Operation,
    item: SharedItem,
    amount: Decimal,
}

/// Owns the undo history. Items stay owned by the caller; each history entry
/// holds a handle to the item it changed so `undo_last` can reach it again.
#[derive(Default)]
pub struct InventoryManager {
    config: LedgerConfig,
    history: Vec<HistoryEntry>,
}

impl InventoryManager {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            history: vec![],
        }
    }

    /// Create an item stored at this ledger's default location
    pub fn new_item(&self, name: impl Into<String>, quantity: i64, price: Decimal) -> SharedItem {
        Item::new_at(name, quantity, price, self.config.default_location().clone()).into_shared()
    }

    /// Authorize and apply `operation` to `item`, then record it for undo.
    ///
    /// Denied or failed operations leave the item and the history untouched.
    /// The item must not be borrowed by the caller for the duration of the
    /// call; if it is, [`LedgerError::ItemBusy`] is returned.
    pub fn perform_operation(
        &mut self,
        actor: &Actor,
        mut operation: Operation,
        item: &SharedItem,
        amount: Decimal,
    ) -> Result<Receipt, LedgerError> {
        let kind = operation.kind();

        if let Err(err) = authorize(actor, kind) {
            tracing::warn!(actor = actor.identity(), role = %actor.role(), %kind, "operation denied");
            return Err(err);
        }
        if let Operation::Relocate { target, .. } = &operation {
            if !self.config.is_known(target) {
                tracing::warn!(location = %target, "relocation to unknown storage location");
                return Err(LedgerError::UnknownLocation(target.clone()));
            }
        }

        // nothing may fail once the item has been changed
        let receipt_id =
            new_uuid_to_bech32("op_").map_err(|err| LedgerError::Receipt(err.to_string()))?;

        let item_name = {
            let mut item = item.try_borrow_mut().map_err(|_| LedgerError::ItemBusy)?;
            operation.apply(&mut item, amount)?;
            item.name().to_string()
        };

        let receipt = Receipt {
            receipt_id,
            actor: actor.identity().to_string(),
            role: actor.role(),
            kind,
            item: item_name,
            amount: Amount(amount),
            recorded_at: TimeStamp::<Utc>::new(),
        };
        tracing::info!(
            actor = actor.identity(),
            %kind,
            item = %receipt.item,
            %amount,
            receipt = %receipt.receipt_id,
            "operation performed"
        );

        self.history.push(HistoryEntry {
            receipt: receipt.clone(),
            operation,
            item: item.clone(),
            amount,
        });

        Ok(receipt)
    }

    /// Reverse the most recent recorded operation and drop it from history.
    pub fn undo_last(&mut self) -> Result<Receipt, LedgerError> {
        let Some(mut entry) = self.history.pop() else {
            tracing::debug!("nothing to undo");
            return Err(LedgerError::EmptyHistory);
        };

        let reversed = match entry.item.try_borrow_mut() {
            Ok(mut item) => entry
                .operation
                .reverse(&mut item, entry.amount)
                .map_err(LedgerError::from),
            Err(_) => Err(LedgerError::ItemBusy),
        };
        // a reverse that did not happen keeps its entry
        if let Err(err) = reversed {
            tracing::warn!(receipt = %entry.receipt.receipt_id, %err, "undo failed");
            self.history.push(entry);
            return Err(err);
        }

        tracing::info!(
            kind = %entry.receipt.kind,
            item = %entry.receipt.item,
            receipt = %entry.receipt.receipt_id,
            "operation undone"
        );
        Ok(entry.receipt)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
    /// Receipts of every recorded operation, oldest first
    pub fn receipts(&self) -> impl Iterator<Item = &Receipt> {
        self.history.iter().map(|entry| &entry.receipt)
    }
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }
}
