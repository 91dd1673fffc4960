use anyhow::{anyhow, Result};
use log::debug;

use crate::cli::render::{print_contact_json, print_contact_table};
use crate::cli::report;
use crate::db::Store;

/// Execute the search command
pub fn run_search(
    store: &Store,
    name: Option<&str>,
    email: Option<&str>,
    phone: Option<&str>,
    json: bool,
) -> Result<()> {
    // The store itself would happily return the whole table; requiring a
    // filter is this layer's job.
    if name.is_none() && email.is_none() && phone.is_none() {
        return Err(anyhow!(
            "Please provide at least one search criteria (--name, --email, or --phone)."
        ));
    }

    let contacts = store
        .search(name, email, phone)
        .map_err(|err| report("search", err))?;
    debug!("search matched {} contacts", contacts.len());

    if json {
        return print_contact_json(&contacts);
    }

    if contacts.is_empty() {
        println!("No contacts found matching the criteria.");
        return Ok(());
    }

    print_contact_table(&contacts, None);

    Ok(())
}
