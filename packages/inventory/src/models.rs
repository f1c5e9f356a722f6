//! # Domain models for materials and loans
//!
//! Defines the records held by [`crate::Inventory`] and written to storage by
//! [`crate::Snapshot`]. Both derive `Serialize + Deserialize` with camelCase
//! field names, which is the record shape browser local storage already holds.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Material`] | A stocked item. `total_quantity` is what the lab owns, `available_quantity` what is not out on loan. |
//! | [`Loan`] | An open loan of some quantity of one material to a named borrower between two calendar dates. |
//! | [`CurrentLoan`] | Read-only pairing of a loan with the name of the material it references. |
//!
//! ## Dates
//!
//! Loan dates are [`NaiveDate`]s written as `YYYY-MM-DD`. When reading, a full
//! RFC 3339 timestamp (`2024-01-01T00:00:00.000Z`) is also accepted and
//! truncated to its UTC calendar date, see [`parse_date`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A laboratory material and its stock counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    /// Owned stock count.
    pub total_quantity: i64,
    /// Stock not currently on loan. Negative after an edit that cuts the total
    /// below the amount on loan.
    pub available_quantity: i64,
}

/// An open loan. Returning it deletes the record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,
    /// Non-owning reference to [`Material::id`].
    pub material_id: String,
    pub borrower_name: String,
    pub quantity: i64,
    #[serde(with = "iso_date")]
    pub start_date: NaiveDate,
    #[serde(with = "iso_date")]
    pub end_date: NaiveDate,
}

/// A loan joined with its material's name, for listing what is out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentLoan<'a> {
    pub loan: &'a Loan,
    pub material_name: &'a str,
}

/// Generate a fresh record identifier (UUID v4, simple hex form).
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Parse a stored date: either `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

mod iso_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date `{raw}`")))
    }
}
