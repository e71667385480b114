use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientEmail, ClientId, NonEmptyString, Pesel};

/// Client as stored. Contact fields are kept verbatim; only inbound data
/// goes through the value-object checks of [`NewClient`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: String,
    pub pesel: String,
}

/// Client data accepted for insertion.
#[derive(Clone, Debug, PartialEq)]
pub struct NewClient {
    pub first_name: NonEmptyString,
    pub last_name: NonEmptyString,
    pub email: ClientEmail,
    pub telephone: NonEmptyString,
    pub pesel: Pesel,
}

impl NewClient {
    #[must_use]
    pub fn new(
        first_name: NonEmptyString,
        last_name: NonEmptyString,
        email: ClientEmail,
        telephone: NonEmptyString,
        pesel: Pesel,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            telephone,
            pesel,
        }
    }
}
