//! A single-store inventory ledger.
//!
//! Items change only through reversible [`operation::Operation`]s run by an
//! [`manager::InventoryManager`], which checks the acting [`actor::Actor`]'s
//! role and keeps an undo history.

pub mod actor;
pub mod auth;
pub mod config;
pub mod error;
pub mod item;
pub mod manager;
pub mod operation;
pub mod receipt;
pub mod telemetry;
pub mod utils;
