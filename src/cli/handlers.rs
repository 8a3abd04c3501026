use std::path::Path;

use kql::search_query::{self, Token};
use kql::Message;
use serde::Serialize;

use super::{CliError, CliResult, Command};
use crate::config::{Config, OutputFormat};

pub fn run(command: Command, config: &Config, output: OutputFormat) -> CliResult<()> {
    match command {
        Command::Tokenize { query } => {
            let tokens = tokenize(&query)?;
            print(&tokens, output)
        }
        Command::Check { query } => {
            println!("{}", search_query::is_kql_query(&query));
            Ok(())
        }
        Command::Normalize { query, group } => {
            let tokens = tokenize(&query)?;
            let tokens = if group {
                search_query::group_conjunctions(tokens)
            } else {
                search_query::normalize(tokens)
            };
            print(&tokens, output)
        }
        Command::Filter {
            query,
            messages,
            count,
        } => {
            let path = messages.or_else(|| config.messages.clone()).ok_or_else(|| {
                CliError::configuration("no message file given and `messages` is not configured")
            })?;
            let messages = load_messages(&path)?;
            let found = filter(&query, &messages)?;

            if count {
                println!("{} messages found", found.len());
                return Ok(());
            }
            print(&found, output)
        }
    }
}

fn tokenize(query: &str) -> CliResult<Vec<Token>> {
    search_query::tokenize(query).map_err(|err| CliError::not_kql(query, err.to_string()))
}

pub fn filter<'a>(query: &str, messages: &'a [Message]) -> CliResult<Vec<&'a Message>> {
    let tokens = tokenize(query)?;
    let Some(filter) = search_query::build_filter(tokens) else {
        return Err(CliError::not_kql(query, "query has no expressions"));
    };
    log::debug!("filter: {filter:?}");

    Ok(messages
        .iter()
        .filter(|msg| search_query::eval(&filter, msg))
        .collect())
}

/// Reads a list of messages. `.yaml`/`.yml` files are parsed as YAML,
/// anything else as JSON.
pub fn load_messages(path: &Path) -> CliResult<Vec<Message>> {
    let data = std::fs::read_to_string(path).map_err(|err| CliError::storage_at(path, err))?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "yaml" | "yml"));

    let messages: Vec<Message> = if is_yaml {
        serde_yml::from_str(&data)?
    } else {
        serde_json::from_str(&data)?
    };
    log::info!("loaded {} messages from {}", messages.len(), path.display());
    Ok(messages)
}

fn print<T: Serialize + ?Sized>(value: &T, output: OutputFormat) -> CliResult<()> {
    let text = match output {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yml::to_string(value)?,
    };
    println!("{}", text.trim_end());
    Ok(())
}
