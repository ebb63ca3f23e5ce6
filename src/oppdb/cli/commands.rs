//! # CLI Layer
//!
//! This module is **one possible UI client** for oppdb. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Parses shell arguments
//! - Formats output for humans
//!
//! ## Structure
//!
//! - `run()`: logging setup, context setup, dispatch (called by `main.rs`)
//! - `handle_*()`: per-command handlers that call the API and print the result
//!
//! Handlers never decide business rules. Validation, not-found and read-only
//! errors come back from the API and surface through `main`.

use super::render::{print_messages, render_config, render_full, render_list};
use super::setup::{Cli, Commands, FieldArgs};
use clap::Parser;
use env_logger::Env;
use log::debug;
use oppdb::api::{Access, ConfigAction, ExportFormat, ListFilter, TldrStyle};
use oppdb::commands::init::describe;
use oppdb::error::Result;
use oppdb::init::{initialize, OppContext};
use oppdb::model::OpportunityType;
use std::path::PathBuf;

/// Database override read from the environment when `--db` is absent.
pub const DB_ENV: &str = "OPPDB_DB";

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let db = cli.db.clone().or_else(|| {
        std::env::var_os(DB_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    });
    let access = if cli.public {
        Access::Public
    } else {
        Access::Admin
    };

    let mut ctx = initialize(db.as_deref(), access)?;
    debug!("using database {}", ctx.db_path.display());

    let outcome = match cli.command {
        Some(Commands::Init) => handle_init(&mut ctx),
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::Edit {
            id,
            fields,
            clear_tldr,
        }) => handle_edit(&mut ctx, id, fields, clear_tldr),
        Some(Commands::List { kind, search }) => handle_list(&ctx, kind, search),
        Some(Commands::View { ids }) => handle_view(&ctx, ids),
        Some(Commands::Tldr { ids, digest }) => handle_tldr(&ctx, ids, digest),
        Some(Commands::Export { format, output }) => handle_export(&ctx, format, output),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None, None),
    };

    let closed = ctx.api.into_store().close();
    outcome.and(closed)
}

fn handle_init(ctx: &mut OppContext) -> Result<()> {
    // Opening the store already ran the migration; report what it did.
    let opened = ctx.api.store().schema_on_open().clone();
    let result = if ctx.api.access() == Access::Admin && opened.changed() {
        describe(opened)
    } else {
        ctx.api.init()?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut OppContext, fields: FieldArgs) -> Result<()> {
    let draft = fields.into_draft(ctx.config.default_type);
    let result = ctx.api.create(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut OppContext, id: i64, fields: FieldArgs, clear_tldr: bool) -> Result<()> {
    let result = ctx.api.update(id, fields.into_patch(clear_tldr))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &OppContext,
    kind: Option<OpportunityType>,
    search: Option<String>,
) -> Result<()> {
    let filter = ListFilter {
        kind,
        search_term: search,
    };
    let result = ctx.api.list(filter)?;
    print!("{}", render_list(&result.listed));
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &OppContext, ids: Vec<i64>) -> Result<()> {
    let result = ctx.api.view(&ids)?;
    print!("{}", render_full(&result.listed));
    print_messages(&result.messages);
    Ok(())
}

fn handle_tldr(ctx: &OppContext, ids: Vec<i64>, digest: bool) -> Result<()> {
    let style = if digest {
        TldrStyle::Digest
    } else {
        TldrStyle::Card
    };
    let result = ctx.api.tldr(&ids, style)?;
    if let Some(text) = &result.text {
        println!("{}", text);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &OppContext, format: ExportFormat, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export(format, output.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &OppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let showing_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(action)?;
    if showing_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
