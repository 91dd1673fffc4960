use anyhow::Result;
use log::debug;

use crate::cli::render::{print_contact_json, print_contact_table};
use crate::cli::report;
use crate::db::Store;

/// Execute the list command
pub fn run_list(store: &Store, all: bool, page: u32, per_page: u32, json: bool) -> Result<()> {
    let result = if all {
        store.list_all()
    } else {
        store.list(page, per_page)
    };
    let contacts = match result {
        Ok(contacts) => contacts,
        Err(err) => return Err(report("list", err)),
    };

    if json {
        return print_contact_json(&contacts);
    }

    if contacts.is_empty() {
        println!("No contacts found on this page.");
        return Ok(());
    }

    let total = store.count().map_err(|err| report("list", err))?;
    let title = if all {
        format!("Contacts ({} total)", total)
    } else {
        format!("Contacts - Page {} ({} total)", page, total)
    };
    print_contact_table(&contacts, Some(&title));
    debug!("listed {} of {} contacts", contacts.len(), total);

    Ok(())
}
