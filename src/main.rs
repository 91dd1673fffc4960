use clap::{CommandFactory, Parser};
use log::info;

use contactbook::cli::{
    run_add, run_delete, run_demo, run_list, run_search, run_update, Cli, Commands,
};
use contactbook::config::Config;
use contactbook::db::Store;
use contactbook::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = Config::load(cli.config.as_deref())?;
    let logger = logging::init(&config.log_file, &config.log_level)?;

    let store = Store::open(&config.db_url)?;
    let outcome = dispatch(&store, command);

    // The connection is released before the process reports success or
    // failure; a failed command must not skip this.
    let closed = store.close();
    info!("contact store closed");
    logger.flush();

    outcome?;
    closed?;
    Ok(())
}

fn dispatch(store: &Store, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Add(args) => run_add(store, &args.name, &args.email, &args.phone),
        Commands::List(args) => run_list(store, args.all, args.page, args.per_page, args.json),
        Commands::Update(args) => run_update(
            store,
            args.id,
            args.email.as_deref(),
            args.phone.as_deref(),
        ),
        Commands::Delete(args) => run_delete(store, args.id),
        Commands::Search(args) => run_search(
            store,
            args.name.as_deref(),
            args.email.as_deref(),
            args.phone.as_deref(),
            args.json,
        ),
        Commands::Demo => run_demo(store),
    }
}
