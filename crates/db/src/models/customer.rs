//! Customer entity model and DTOs.

use customers_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A row from the `customers` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub status: String,
}

/// Request body for creating or replacing a customer.
///
/// Missing or `null` fields become the empty string, so an update always
/// overwrites all three columns.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerInput {
    /// Accepted for shape compatibility and ignored: ids come from the store
    /// on insert and from the path on update.
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl CustomerInput {
    /// Combine the input with an id into the record it describes.
    pub fn into_customer(self, id: DbId) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            status: self.status,
        }
    }
}
