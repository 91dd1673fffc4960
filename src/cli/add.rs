use anyhow::Result;
use log::info;

use crate::cli::report;
use crate::db::Store;

/// Execute the add command
pub fn run_add(store: &Store, name: &str, email: &str, phone: &str) -> Result<()> {
    match store.create(name, email, phone) {
        Ok(id) => {
            info!("added contact '{}' with id {}", name, id);
            println!("Contact '{}' added successfully with ID {}.", name, id);
            Ok(())
        }
        Err(err) => Err(report("add", err)),
    }
}
