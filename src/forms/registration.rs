use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, de};
use validator::Validate;

use crate::domain::client::NewClient;
use crate::domain::types::{ClientEmail, NonEmptyString, Pesel};
use crate::forms::FormError;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /api/trips/{idTrip}/clients`.
pub struct RegisterClientForm {
    #[validate(length(min = 1, max = 120))]
    pub first_name: String,
    #[validate(length(min = 1, max = 120))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 40))]
    pub telephone: String,
    #[validate(length(equal = 11))]
    pub pesel: String,
    /// Trip to register for. The route segment is not consulted.
    pub id_trip: i32,
    #[serde(default, deserialize_with = "deserialize_payment_date")]
    pub payment_date: Option<NaiveDateTime>,
}

/// Validated registration request.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterClientPayload {
    pub new_client: NewClient,
    /// Raw trip identifier; existence is checked by the service after the
    /// client has been stored.
    pub trip_id: i32,
    pub payment_date: Option<NaiveDateTime>,
}

impl RegisterClientForm {
    /// Validates the body into a payload for the trip named by `idTrip`.
    pub fn into_payload(self) -> Result<RegisterClientPayload, FormError> {
        self.validate()?;

        let new_client = NewClient::new(
            NonEmptyString::new(self.first_name).map_err(|_| FormError::EmptyField("firstName"))?,
            NonEmptyString::new(self.last_name).map_err(|_| FormError::EmptyField("lastName"))?,
            ClientEmail::new(self.email).map_err(|_| FormError::InvalidEmail)?,
            NonEmptyString::new(self.telephone).map_err(|_| FormError::EmptyField("telephone"))?,
            Pesel::new(self.pesel).map_err(|_| FormError::InvalidPesel)?,
        );

        Ok(RegisterClientPayload {
            new_client,
            trip_id: self.id_trip,
            payment_date: self.payment_date,
        })
    }
}

/// Parses an ISO-8601 payment date into naive UTC.
///
/// Accepts RFC 3339 timestamps with an offset (`Z` or `+02:00`), local
/// timestamps with optional fractional seconds, and plain dates (midnight).
pub fn parse_payment_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.with_timezone(&Utc).naive_utc());
    }
    if let Ok(local) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(local);
    }
    if let Ok(local) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(local);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn deserialize_payment_date<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|value| {
        parse_payment_date(&value)
            .ok_or_else(|| de::Error::custom(format!("invalid paymentDate `{value}`")))
    })
    .transpose()
}
