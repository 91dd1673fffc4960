use anyhow::{anyhow, Result};
use log::info;

use crate::cli::report;
use crate::db::Store;

/// Execute the update command
pub fn run_update(
    store: &Store,
    id: i64,
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<()> {
    if email.is_none() && phone.is_none() {
        return Err(anyhow!(
            "Please provide at least one field to update (--email or --phone)."
        ));
    }

    if let Err(err) = store.update(id, email, phone) {
        return Err(report("update", err));
    }

    let contact = store.get(id).map_err(|err| report("update", err))?;
    info!("updated contact {}", id);
    println!("Contact ID {} has been updated.", id);
    println!("  {}  {}  {}", contact.name, contact.email, contact.phone);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;

    fn setup_test_db() -> (Store, i64) {
        let db = Store::open_memory().unwrap();
        let id = db.create("Alice Smith", "alice@example.com", "555-1234").unwrap();
        (db, id)
    }

    #[test]
    fn test_update_email() {
        let (db, id) = setup_test_db();

        run_update(&db, id, Some("alice.smith@example.com"), None).unwrap();

        let contact = db.get(id).unwrap();
        assert_eq!(contact.email, "alice.smith@example.com");
        assert_eq!(contact.phone, "555-1234");
    }

    #[test]
    fn test_update_requires_a_field() {
        let (db, id) = setup_test_db();
        assert!(run_update(&db, id, None, None).is_err());
    }

    #[test]
    fn test_update_missing_contact() {
        let (db, id) = setup_test_db();
        assert!(run_update(&db, id + 1, Some("x@example.com"), None).is_err());
    }
}
