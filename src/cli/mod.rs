use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::{error, warn};

use crate::db::StoreError;

pub mod add;
pub mod delete;
pub mod demo;
pub mod list;
pub mod render;
pub mod search;
pub mod update;

pub use add::run_add;
pub use delete::run_delete;
pub use demo::run_demo;
pub use list::run_list;
pub use search::run_search;
pub use update::run_update;

#[derive(Parser)]
#[command(name = "contactbook")]
#[command(about = "Contact management for the command line")]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to ./config.ini)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new contact
    Add(AddArgs),
    /// List contacts with pagination
    List(ListArgs),
    /// Update a contact's email and/or phone
    Update(UpdateArgs),
    /// Delete a contact
    Delete(DeleteArgs),
    /// Search for contacts
    Search(SearchArgs),
    /// Run the scripted walkthrough against the configured store
    Demo,
}

#[derive(Args)]
pub struct AddArgs {
    /// Name of the contact
    #[arg(long)]
    pub name: String,
    /// Email of the contact
    #[arg(long)]
    pub email: String,
    /// Phone number of the contact
    #[arg(long)]
    pub phone: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Show all contacts, ignoring pagination
    #[arg(long)]
    pub all: bool,
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,
    /// Number of contacts per page
    #[arg(long = "per_page", default_value = "10")]
    pub per_page: u32,
    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// ID of the contact to update
    #[arg(long)]
    pub id: i64,
    /// New email address
    #[arg(long)]
    pub email: Option<String>,
    /// New phone number
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// ID of the contact to delete
    #[arg(long)]
    pub id: i64,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Name to search for
    #[arg(long)]
    pub name: Option<String>,
    /// Email to search for
    #[arg(long)]
    pub email: Option<String>,
    /// Phone number to search for
    #[arg(long)]
    pub phone: Option<String>,
    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Log a store failure at the severity matching its kind, then hand it back
/// for the caller's error path. Not-found and validation are expected user
/// mistakes; everything else is a real fault.
pub(crate) fn report(action: &str, err: StoreError) -> anyhow::Error {
    match &err {
        StoreError::NotFound(id) => warn!("{}: no contact found with ID {}", action, id),
        StoreError::Validation(msg) => warn!("{}: {}", action, msg),
        StoreError::Duplicate(_) | StoreError::Storage(_) => error!("{}: {}", action, err),
    }
    anyhow::Error::new(err)
}
