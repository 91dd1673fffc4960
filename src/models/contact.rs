use serde::{Deserialize, Serialize};

/// A single contact record as stored in the `contacts` table.
///
/// `id` is assigned by the database at insert time and never reused.
/// `email` and `phone` are unique across the whole table; `name` is not,
/// and cannot be changed after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}
