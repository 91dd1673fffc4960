use rusqlite::{params, Row};

use super::{Store, StoreError};
use crate::models::Contact;

impl Store {
    // ==================== CREATE ====================

    /// Insert a new contact and return the id assigned by the database.
    pub fn create(&self, name: &str, email: &str, phone: &str) -> Result<i64, StoreError> {
        validate_field("name", name)?;
        validate_field("email", email)?;
        validate_field("phone", phone)?;

        self.conn.execute(
            "INSERT INTO contacts (name, email, phone) VALUES (?, ?, ?)",
            params![name, email, phone],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    // ==================== READ ====================

    pub fn get(&self, id: i64) -> Result<Contact, StoreError> {
        let result = self.conn.query_row(
            "SELECT id, name, email, phone FROM contacts WHERE id = ?",
            [id],
            row_to_contact,
        );

        match result {
            Ok(contact) => Ok(contact),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StoreError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// One page of contacts, ordered by id ascending. A page past the last
    /// record is an empty vec, not an error. No upper bound on `per_page`.
    pub fn list(&self, page: u32, per_page: u32) -> Result<Vec<Contact>, StoreError> {
        if page == 0 {
            return Err(StoreError::Validation("page must be at least 1".into()));
        }
        if per_page == 0 {
            return Err(StoreError::Validation("per_page must be at least 1".into()));
        }

        let offset = (page as i64 - 1) * per_page as i64;
        let mut stmt = self.conn.prepare(
            "SELECT id, name, email, phone FROM contacts ORDER BY id ASC LIMIT ? OFFSET ?",
        )?;

        let contacts = stmt
            .query_map(params![per_page, offset], row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(contacts)
    }

    pub fn list_all(&self) -> Result<Vec<Contact>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, email, phone FROM contacts ORDER BY id ASC")?;

        let contacts = stmt
            .query_map([], row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(contacts)
    }

    pub fn count(&self) -> Result<u32, StoreError> {
        let count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
        Ok(count)
    }

    // ==================== UPDATE ====================

    /// Apply only the provided fields to an existing contact. Name is fixed
    /// at creation and cannot be changed here. The whole change is one
    /// UPDATE statement, so a constraint failure leaves the row untouched.
    pub fn update(
        &self,
        id: i64,
        new_email: Option<&str>,
        new_phone: Option<&str>,
    ) -> Result<(), StoreError> {
        let mut assignments = Vec::new();
        let mut values: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(email) = new_email {
            validate_field("email", email)?;
            assignments.push("email = ?");
            values.push(Box::new(email.to_string()));
        }
        if let Some(phone) = new_phone {
            validate_field("phone", phone)?;
            assignments.push("phone = ?");
            values.push(Box::new(phone.to_string()));
        }

        if assignments.is_empty() {
            // Nothing to change; a missing id must still be reported.
            return self.get(id).map(|_| ());
        }

        values.push(Box::new(id));

        let sql = format!(
            "UPDATE contacts SET {} WHERE id = ?",
            assignments.join(", ")
        );
        let value_refs: Vec<&dyn rusqlite::ToSql> = values.iter().map(|v| v.as_ref()).collect();
        let rows = self.conn.execute(&sql, value_refs.as_slice())?;

        if rows == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    // ==================== DELETE ====================

    /// Remove a contact. A second delete of the same id reports not-found
    /// again rather than succeeding silently.
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let rows = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?", [id])?;

        if rows == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    // ==================== SEARCH ====================

    /// Case-insensitive substring search; every supplied filter must match.
    /// With no filters the whole table comes back (callers are expected to
    /// supply at least one, enforced at the command layer).
    pub fn search(
        &self,
        name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Vec<Contact>, StoreError> {
        let mut sql = String::from("SELECT id, name, email, phone FROM contacts WHERE 1=1");
        let mut values: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        for (column, filter) in [("name", name), ("email", email), ("phone", phone)] {
            if let Some(term) = filter {
                // ESCAPE '\' enables backslash escaping for % and _ literals
                sql.push_str(&format!(" AND LOWER({}) LIKE ? ESCAPE '\\'", column));
                values.push(Box::new(format!("%{}%", escape_like(&term.to_lowercase()))));
            }
        }

        sql.push_str(" ORDER BY id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let value_refs: Vec<&dyn rusqlite::ToSql> = values.iter().map(|v| v.as_ref()).collect();

        let contacts = stmt
            .query_map(value_refs.as_slice(), row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(contacts)
    }
}

fn row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
    })
}

fn validate_field(field: &str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Escape LIKE metacharacters (% _ \)
fn escape_like(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' | '_' | '\\' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
