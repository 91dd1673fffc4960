use anyhow::Result;
use log::info;

use crate::cli::report;
use crate::db::Store;

/// Execute the delete command
pub fn run_delete(store: &Store, id: i64) -> Result<()> {
    if let Err(err) = store.delete(id) {
        return Err(report("delete", err));
    }

    info!("deleted contact {}", id);
    println!("Contact with ID {} has been deleted.", id);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Store, StoreError};

    #[test]
    fn test_delete_existing_contact() {
        let db = Store::open_memory().unwrap();
        let id = db.create("Alice Smith", "alice@example.com", "555-1234").unwrap();

        run_delete(&db, id).unwrap();
        assert!(matches!(db.get(id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_delete_missing_contact() {
        let db = Store::open_memory().unwrap();
        assert!(run_delete(&db, 99).is_err());
    }

    #[test]
    fn test_second_delete_still_fails() {
        let db = Store::open_memory().unwrap();
        let id = db.create("Alice Smith", "alice@example.com", "555-1234").unwrap();

        run_delete(&db, id).unwrap();
        assert!(run_delete(&db, id).is_err());
    }
}
