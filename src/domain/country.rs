use serde::{Deserialize, Serialize};

use crate::domain::types::CountryId;

/// Read-only reference data attached to trips.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
}
