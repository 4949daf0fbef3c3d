//! Wire form of monetary amounts and rates: whole values go out as JSON
//! integers (`44967`), fractional ones as numbers (`10.5`). Never strings.

use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::Serializer;

pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let normalized = value.normalize();

    if normalized.scale() == 0 {
        if let Some(whole) = normalized.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }

    match normalized.to_f64() {
        Some(number) => serializer.serialize_f64(number),
        None if normalized.is_zero() => serializer.serialize_i64(0),
        None => Err(serde::ser::Error::custom(format!(
            "amount {} is not representable as a JSON number",
            normalized
        ))),
    }
}
