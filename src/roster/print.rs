use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::config::RosterConfig;
use roster::error::Result;
use roster::format::{print_records, Sink};
use roster::model::Record;
use std::io::Write;
use std::path::Path;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Load-time notes go to stderr so they never mix with record lines.
pub(crate) fn print_load_messages(messages: &[CmdMessage], verbose: bool) {
    for message in messages {
        match message.level {
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
            MessageLevel::Info | MessageLevel::Success if verbose => {
                eprintln!("{}", message.content.dimmed())
            }
            _ => {}
        }
    }
}

pub(crate) fn print_config(config: &RosterConfig) {
    for key in RosterConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

pub(crate) fn write_records(records: &[Record], output: Option<&Path>) -> Result<()> {
    let mut sink = match output {
        Some(path) => Sink::file(path)?,
        None => Sink::console(),
    };
    print_records(records, &mut sink)?;
    sink.flush()?;
    Ok(())
}
