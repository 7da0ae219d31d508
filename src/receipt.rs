//! Audit receipts for recorded operations
use super::actor::Role;
use super::operation::OperationKind;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct TimeStamp<T: TimeZone>(DateTime<T>);

// newtype wrapper over Decimal because Decimal doesn't implement minicbor traits.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Amount(pub Decimal);

// Summary of one history entry. Its key is the hash of its cbor encoding.
#[derive(minicbor::Encode, minicbor::Decode, Debug, PartialEq, Eq, Clone)]
pub struct Receipt {
    #[n(0)]
    pub receipt_id: String, // bech32 `op_` address
    #[n(1)]
    pub actor: String,
    #[n(2)]
    pub role: Role,
    #[n(3)]
    pub kind: OperationKind,
    #[n(4)]
    pub item: String,
    #[n(5)]
    pub amount: Amount,
    #[n(6)]
    pub recorded_at: TimeStamp<Utc>,
}

impl TimeStamp<Utc> {
    pub fn new() -> Self {
        Self(Utc::now())
    }
    pub fn to_datetime_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Receipt {
    /// Encode the receipt into cbor and hash it. Returns `(sha256 hex, cbor)`.
    pub fn build(&self) -> anyhow::Result<(String, Vec<u8>)> {
        let cbor = minicbor::to_vec(self)?;
        let hash = sha256::digest(&cbor);

        Ok((hash, cbor))
    }
}

impl<C> minicbor::Encode<C> for TimeStamp<Utc> {
    fn encode<W: minicbor::encode::Write>(
        &self,
        e: &mut minicbor::Encoder<W>,
        _: &mut C,
    ) -> Result<(), minicbor::encode::Error<W::Error>> {
        if let Some(nsec) = self.0.timestamp_nanos_opt() {
            return e.i64(nsec)?.ok();
        }

        Err(minicbor::encode::Error::message(
            "failed to encode timestamp. timestamp_nanos_opt returned None",
        ))
    }
}

impl<'b, C> minicbor::Decode<'b, C> for TimeStamp<Utc> {
    fn decode(d: &mut minicbor::Decoder<'b>, _: &mut C) -> Result<Self, minicbor::decode::Error> {
        let nsecs = d.i64()?;

        Ok(TimeStamp(DateTime::from_timestamp_nanos(nsecs)))
    }
}

// decimals travel as their canonical string so no precision is lost
impl<C> minicbor::Encode<C> for Amount {
    fn encode<W: minicbor::encode::Write>(
        &self,
        e: &mut minicbor::Encoder<W>,
        _: &mut C,
    ) -> Result<(), minicbor::encode::Error<W::Error>> {
        e.str(&self.0.to_string())?.ok()
    }
}

impl<'b, C> minicbor::Decode<'b, C> for Amount {
    fn decode(d: &mut minicbor::Decoder<'b>, _: &mut C) -> Result<Self, minicbor::decode::Error> {
        let text = d.str()?;

        Decimal::from_str(text)
            .map(Amount)
            .map_err(|_| minicbor::decode::Error::message("failed to parse decimal amount"))
    }
}
