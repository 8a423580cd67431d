//! `backstage locations` — manage registered catalog locations.

use clap::{Args, Subcommand};
use colored::Colorize;

use super::Context;
use crate::output::{self, field};

#[derive(Subcommand)]
pub enum LocationCommands {
    /// Register a URL location (e.g. a `catalog-info.yaml`).
    Create(CreateArgs),
    /// List registered locations.
    List,
    /// Show a location by ID.
    Get(IdArgs),
    /// Unregister a location by ID.
    Delete(IdArgs),
}

#[derive(Args)]
pub struct CreateArgs {
    /// URL of the descriptor file to register.
    pub target: String,
    /// Validate the location and preview its entities without saving it.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct IdArgs {
    /// Location ID.
    pub id: String,
}

pub async fn execute(ctx: &Context, cmd: LocationCommands) -> anyhow::Result<()> {
    match cmd {
        LocationCommands::Create(args) => create(ctx, args).await,
        LocationCommands::List => list(ctx).await,
        LocationCommands::Get(args) => get(ctx, args).await,
        LocationCommands::Delete(args) => delete(ctx, args).await,
    }
}

async fn create(ctx: &Context, args: CreateArgs) -> anyhow::Result<()> {
    let resp = ctx
        .client
        .catalog()
        .locations()
        .create(&args.target, args.dry_run)
        .await?;

    output::emit(ctx.output, resp, |created| {
        let verb = if args.dry_run { "Validated" } else { "Registered" };
        println!(
            "\n  {} {} {}\n",
            "✓".green().bold(),
            verb,
            created.location.target.bold()
        );
        field("ID", &created.location.id);
        field("Type", &created.location.location_type);
        if created.exists == Some(true) {
            println!("  {} location is already registered", "⚠".yellow().bold());
        }
        if !created.entities.is_empty() {
            println!("\n  {}:", "Entities".bold());
            for entity in &created.entities {
                println!("    {}", entity.entity_ref());
            }
        }
    })
}

async fn list(ctx: &Context) -> anyhow::Result<()> {
    let resp = ctx.client.catalog().locations().list().await?;

    output::emit(ctx.output, resp, |locations| {
        if locations.is_empty() {
            println!("  (no locations)");
            return;
        }
        println!(
            "  {:<38} {:<8} {}",
            "ID".bold(),
            "TYPE".bold(),
            "TARGET".bold()
        );
        println!("  {}", "─".repeat(100).dimmed());
        for item in locations {
            let loc = &item.data;
            println!("  {:<38} {:<8} {}", loc.id, loc.location_type, loc.target);
        }
        println!("\n  {} {} location(s)", "→".dimmed(), locations.len());
    })
}

async fn get(ctx: &Context, args: IdArgs) -> anyhow::Result<()> {
    let resp = ctx.client.catalog().locations().get_by_id(&args.id).await?;

    output::emit(ctx.output, resp, |loc| {
        println!();
        field("ID", &loc.id);
        field("Type", &loc.location_type);
        field("Target", &loc.target);
    })
}

async fn delete(ctx: &Context, args: IdArgs) -> anyhow::Result<()> {
    let resp = ctx.client.catalog().locations().delete_by_id(&args.id).await?;
    output::ensure_success(resp)?;
    println!("  {} Removed location {}", "✓".green().bold(), args.id.bold());
    Ok(())
}
