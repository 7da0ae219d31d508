//! Stock items and their storage locations
use super::error::OperationError;
use rust_decimal::Decimal;
use std::{cell::RefCell, fmt, rc::Rc};

pub const MAIN_STORAGE: &str = "Main Storage";

/// Handle through which the caller and the ledger history share one item.
pub type SharedItem = Rc<RefCell<Item>>;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    quantity: i64,
    price: Decimal,
    location: Location,
}

impl Location {
    pub fn parse(name: &str) -> Result<Self, OperationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(OperationError::InvalidLocation(name.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
    pub fn main() -> Self {
        Self(MAIN_STORAGE.to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::main()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<C> minicbor::Encode<C> for Location {
    fn encode<W: minicbor::encode::Write>(
        &self,
        e: &mut minicbor::Encoder<W>,
        _: &mut C,
    ) -> Result<(), minicbor::encode::Error<W::Error>> {
        e.str(&self.0)?.ok()
    }
}

impl<'b, C> minicbor::Decode<'b, C> for Location {
    fn decode(d: &mut minicbor::Decoder<'b>, _: &mut C) -> Result<Self, minicbor::decode::Error> {
        let name = d.str()?;

        Location::parse(name).map_err(|_| minicbor::decode::Error::message("empty storage location"))
    }
}

impl Item {
    /// New item stored at the main storage location
    pub fn new(name: impl Into<String>, quantity: i64, price: Decimal) -> Self {
        Self::new_at(name, quantity, price, Location::main())
    }
    pub(crate) fn new_at(name: impl Into<String>, quantity: i64, price: Decimal, location: Location) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            location,
        }
    }
    pub fn into_shared(self) -> SharedItem {
        Rc::new(RefCell::new(self))
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn quantity(&self) -> i64 {
        self.quantity
    }
    pub fn price(&self) -> Decimal {
        self.price
    }
    pub fn location(&self) -> &Location {
        &self.location
    }

    // mutation stays inside the crate so that operations are the only writers
    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
    pub(crate) fn set_price(&mut self, price: Decimal) {
        self.price = price;
    }
    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = location;
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name - {}, quantity - {}, price - {}, location - {}",
            self.name, self.quantity, self.price, self.location
        )
    }
}
