//! Replays the store walkthrough: stock moves, a relocation, an admin reprice,
//! a refused staff reprice and two undos, printing the item after every step.
//!
//! Run with `RUST_LOG=debug cargo run --example walkthrough` to see the ledger's
//! own log events.

use inventory_ledger::{
    actor::{Actor, Role},
    config::LedgerConfig,
    item::Location,
    manager::InventoryManager,
    operation::Operation,
    telemetry,
};
use rust_decimal::Decimal;
use std::str::FromStr;

fn main() -> anyhow::Result<()> {
    telemetry::init();

    let admin = Actor::new("admin_user", Role::Admin);
    let staff = Actor::new("staff_user", Role::Staff);
    println!("{admin}");
    println!("{staff}");

    let config = LedgerConfig::new().with_location("Another Storage")?;
    let mut manager = InventoryManager::new(config);

    let item = manager.new_item("Iphone", 10, Decimal::from_str("1599.99")?);
    println!("{}", item.borrow());

    manager.perform_operation(&staff, Operation::add_stock(), &item, Decimal::from(5))?;
    println!("{}", item.borrow());

    manager.perform_operation(&staff, Operation::remove_stock(), &item, Decimal::from(3))?;
    println!("{}", item.borrow());

    let target = Location::parse("Another Storage")?;
    manager.perform_operation(&staff, Operation::relocate(target), &item, Decimal::ZERO)?;
    println!("{}", item.borrow());

    let receipt = manager.perform_operation(
        &admin,
        Operation::reprice(),
        &item,
        Decimal::from_str("50.00")?,
    )?;
    println!("{}", item.borrow());

    let (hash, _) = receipt.build()?;
    println!("receipt {} -> {hash}", receipt.receipt_id);

    if let Err(err) = manager.perform_operation(
        &staff,
        Operation::reprice(),
        &item,
        Decimal::from_str("50.00")?,
    ) {
        println!("Error! {err}");
    }
    println!("{}", item.borrow());

    for _ in 0..2 {
        match manager.undo_last() {
            Ok(undone) => println!("undid {}", undone.kind),
            Err(err) => println!("{err}"),
        }
        println!("{}", item.borrow());
    }

    Ok(())
}
