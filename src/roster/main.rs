use clap::Parser;
use roster::api::{ConfigAction, RosterApi};
use roster::config::config_dir;
use roster::error::Result;
use roster::logging;
use roster::store::RecordStore;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_config, print_load_messages, print_messages, write_records};

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the command reported an error message.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut api = RosterApi::new(RecordStore::new(), config_dir()?)?;
    tracing::debug!(config_dir = %api.config_dir().display(), "starting");

    if !cli.inputs.is_empty() {
        let loaded = api.import(&cli.inputs, cli.normalize)?;
        print_load_messages(&loaded.messages, cli.verbose);
    }

    let lists_records = cli.command.as_ref().map_or(true, Commands::lists_records);
    let result = match cli.command {
        None | Some(Commands::List) => api.list()?,
        Some(Commands::Get { id }) => api.get(id)?,
        Some(Commands::LastName { name }) => api.search_last_name(&name)?,
        Some(Commands::Major { prefix }) => api.search_major(&prefix)?,
        Some(Commands::Check { id }) => api.check(id)?,
        Some(Commands::Config { key, value }) => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(k), None) => ConfigAction::ShowKey(k),
                (Some(k), Some(v)) => ConfigAction::Set(k, v),
            };
            let is_show_all = matches!(action, ConfigAction::ShowAll);
            let result = api.config(action)?;
            if is_show_all {
                if let Some(config) = &result.config {
                    print_config(config);
                }
            }
            result
        }
    };

    if lists_records {
        write_records(&result.listed_records, cli.output.as_deref())?;
    }
    print_messages(&result.messages);

    let succeeded = !result.has_errors();
    api.into_store().release();
    Ok(succeeded)
}
