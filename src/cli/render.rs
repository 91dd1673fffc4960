use anyhow::Result;

use crate::models::Contact;

const HEADERS: [&str; 4] = ["ID", "NAME", "EMAIL", "PHONE"];

/// Print contacts as a fixed-width table, each column sized to its widest
/// cell.
pub fn print_contact_table(contacts: &[Contact], title: Option<&str>) {
    let ids: Vec<String> = contacts.iter().map(|c| c.id.to_string()).collect();
    let widths = column_widths(contacts, &ids);

    if let Some(title) = title {
        println!("{}", title);
    }
    println!(
        "{:<id_w$}  {:<name_w$}  {:<email_w$}  {:<phone_w$}",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        HEADERS[3],
        id_w = widths[0],
        name_w = widths[1],
        email_w = widths[2],
        phone_w = widths[3],
    );
    for (contact, id) in contacts.iter().zip(&ids) {
        println!(
            "{:<id_w$}  {:<name_w$}  {:<email_w$}  {:<phone_w$}",
            id,
            contact.name,
            contact.email,
            contact.phone,
            id_w = widths[0],
            name_w = widths[1],
            email_w = widths[2],
            phone_w = widths[3],
        );
    }
}

pub fn print_contact_json(contacts: &[Contact]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(contacts)?);
    Ok(())
}

fn column_widths(contacts: &[Contact], ids: &[String]) -> [usize; 4] {
    let mut widths = [
        HEADERS[0].len(),
        HEADERS[1].len(),
        HEADERS[2].len(),
        HEADERS[3].len(),
    ];
    for (contact, id) in contacts.iter().zip(ids) {
        widths[0] = widths[0].max(id.len());
        widths[1] = widths[1].max(contact.name.len());
        widths[2] = widths[2].max(contact.email.len());
        widths[3] = widths[3].max(contact.phone.len());
    }
    widths
}
