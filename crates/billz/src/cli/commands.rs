//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Logging, data directory, settings and the API
//! 3. **Dispatch**: Route each command to its handler
//! 4. **Output Formatting**: Through `render.rs`
//! 5. **Error Handling**: Errors bubble up to `main`, which prints them and exits 1

use super::logging;
use super::render::{
    render_config, render_item_details, render_item_list, render_messages, render_stats,
    render_total_line,
};
use super::setup::{Cli, Commands};
use billzapp::api::{CmdResult, ConfigAction, ItemFilter};
use billzapp::error::Result;
use billzapp::init::{initialize, BillzContext};
use billzapp::model::ItemPatch;
use billzapp::store::SortOrder;
use clap::Parser;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = initialize(cli.data.clone())?;

    // Naked `billz` lists
    let command = cli.command.unwrap_or(Commands::List {
        search: None,
        ids: false,
        json: false,
    });
    debug!(?command, "dispatching");

    match command {
        Commands::Add { name, price, date } => {
            let result = ctx.api.add_item(&name, &price, &date)?;
            print_messages(&result);
        }
        Commands::List { search, ids, json } => {
            let result = ctx.api.list_items(ItemFilter { search })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result.listed_items)?);
            } else {
                print_list(&ctx, &result, ids);
            }
        }
        Commands::View { indexes, json } => {
            let result = ctx.api.view_items(&indexes)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result.listed_items)?);
            } else {
                print!(
                    "{}",
                    render_item_details(&result.listed_items, &ctx.config.currency)
                );
            }
        }
        Commands::Edit {
            index,
            name,
            price,
            date,
        } => {
            let patch = ItemPatch { name, price, date };
            let result = ctx.api.update_item(&index, patch)?;
            print_messages(&result);
        }
        Commands::Remove { indexes } => {
            let result = ctx.api.remove_items(&indexes)?;
            print_messages(&result);
        }
        Commands::Sort { by, desc } => {
            let result = ctx
                .api
                .sort_items(by.into(), SortOrder::from_ascending(!desc))?;
            print_list(&ctx, &result, false);
            print_messages(&result);
        }
        Commands::Total => {
            let result = ctx.api.total()?;
            print!(
                "{}",
                render_total_line(result.total.unwrap_or_default(), &ctx.config.currency)
            );
        }
        Commands::Stats { json } => {
            let result = ctx.api.stats()?;
            match (&result.stats, json) {
                (Some(stats), true) => println!("{}", serde_json::to_string_pretty(stats)?),
                (Some(stats), false) if stats.count > 0 => {
                    print!("{}", render_stats(stats, &ctx.config.currency))
                }
                _ => print_messages(&result),
            }
        }
        Commands::Export { path, preview } => {
            let result = if preview {
                ctx.api.preview_invoice()?
            } else {
                ctx.api.export_invoice(path.as_deref())?
            };
            match &result.invoice_text {
                Some(text) => println!("{}", text),
                None => print_messages(&result),
            }
        }
        Commands::Reload => {
            let result = ctx.api.reload()?;
            print_messages(&result);
        }
        Commands::Config { key, value } => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(key), None) => ConfigAction::ShowKey(key),
                (Some(key), Some(value)) => ConfigAction::Set(key, value),
            };
            let show_all = action == ConfigAction::ShowAll;
            let result = ctx.api.config(action)?;
            match (&result.config, show_all) {
                (Some(config), true) => print!("{}", render_config(config)),
                _ => print_messages(&result),
            }
        }
        Commands::Path => {
            println!("{}", ctx.api.data_file().display());
        }
    }

    Ok(())
}

fn print_list(ctx: &BillzContext, result: &CmdResult, show_ids: bool) {
    print!(
        "{}",
        render_item_list(
            &result.listed_items,
            result.total.unwrap_or_default(),
            &ctx.config.currency,
            show_ids,
        )
    );
}

fn print_messages(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
}
