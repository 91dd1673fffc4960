use anyhow::Result;
use log::info;

use crate::cli::render::print_contact_table;
use crate::cli::report;
use crate::db::{Store, StoreError};

/// Run a fixed walkthrough: seed two contacts, list, update one email,
/// search, delete, list again. Re-running against a non-empty store skips
/// the steps whose seed contact already exists instead of aborting
/// mid-sequence.
pub fn run_demo(store: &Store) -> Result<()> {
    let alice = demo_add(store, "Alice Smith", "alice@example.com", "555-1234")?;
    let bob = demo_add(store, "Bob Johnson", "bob@example.com", "555-5678")?;

    let contacts = store.list(1, 10).map_err(|err| report("demo", err))?;
    print_contact_table(&contacts, Some("List of Contacts"));

    if let Some(id) = alice {
        store
            .update(id, Some("alice.smith@example.com"), None)
            .map_err(|err| report("demo", err))?;
        let updated = store.get(id).map_err(|err| report("demo", err))?;
        println!("Contact ID {}'s email updated to '{}'.", id, updated.email);
    }

    let matches = store
        .search(Some("alice"), None, None)
        .map_err(|err| report("demo", err))?;
    print_contact_table(&matches, Some("Search Results for 'alice'"));

    if let Some(id) = bob {
        store.delete(id).map_err(|err| report("demo", err))?;
        println!("Contact with ID {} has been deleted.", id);
    }

    let contacts = store.list(1, 10).map_err(|err| report("demo", err))?;
    print_contact_table(&contacts, Some("List of Contacts"));

    Ok(())
}

fn demo_add(store: &Store, name: &str, email: &str, phone: &str) -> Result<Option<i64>> {
    match store.create(name, email, phone) {
        Ok(id) => {
            info!("demo added contact '{}' with id {}", name, id);
            println!("Contact '{}' added successfully with ID {}.", name, id);
            Ok(Some(id))
        }
        Err(StoreError::Duplicate(field)) => {
            println!("Contact '{}' already exists ({} taken), skipping.", name, field);
            Ok(None)
        }
        Err(err) => Err(report("demo", err)),
    }
}
