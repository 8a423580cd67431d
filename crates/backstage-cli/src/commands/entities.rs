//! `backstage entities` — untyped access to entities by UID.

use backstage_catalog::{Entity, ListEntityOptions, ListEntityOrder};
use clap::{Args, Subcommand};
use colored::Colorize;

use super::Context;
use crate::output::{self, field, json_block};

#[derive(Subcommand)]
pub enum EntityCommands {
    /// List entities, optionally filtered, projected and ordered.
    List(ListArgs),
    /// Show a single entity.
    Get(UidArgs),
    /// Remove an entity from the catalog.
    Delete(UidArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter predicate, e.g. `kind=component` (repeatable).
    #[arg(long = "filter", short = 'f')]
    pub filters: Vec<String>,
    /// Field to include in the reply, e.g. `metadata.name` (repeatable).
    #[arg(long = "field")]
    pub fields: Vec<String>,
    /// Sort key as `asc:<field>` or `desc:<field>` (repeatable).
    #[arg(long = "order", value_parser = parse_order)]
    pub orders: Vec<ListEntityOrder>,
}

#[derive(Args)]
pub struct UidArgs {
    /// Entity UID.
    pub uid: String,
}

pub async fn execute(ctx: &Context, cmd: EntityCommands) -> anyhow::Result<()> {
    match cmd {
        EntityCommands::List(args) => list(ctx, args).await,
        EntityCommands::Get(args) => get(ctx, args).await,
        EntityCommands::Delete(args) => delete(ctx, args).await,
    }
}

/// Parse `dir:field` into an order. The direction is checked by the client.
fn parse_order(raw: &str) -> Result<ListEntityOrder, String> {
    let (direction, field) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected <asc|desc>:<field>, got `{raw}`"))?;
    if field.is_empty() {
        return Err("order field cannot be empty".into());
    }
    Ok(ListEntityOrder {
        direction: direction.to_string(),
        field: field.to_string(),
    })
}

async fn list(ctx: &Context, args: ListArgs) -> anyhow::Result<()> {
    let options = ListEntityOptions {
        filters: args.filters,
        fields: args.fields,
        order: args.orders,
    };
    let resp = ctx.client.catalog().entities().list(Some(&options)).await?;

    output::emit(ctx.output, resp, |entities| {
        if entities.is_empty() {
            println!("  (no entities)");
            return;
        }
        println!(
            "  {:<12} {:<16} {:<32} {}",
            "KIND".bold(),
            "NAMESPACE".bold(),
            "NAME".bold(),
            "UID".bold()
        );
        println!("  {}", "─".repeat(100).dimmed());
        for e in entities {
            println!(
                "  {:<12} {:<16} {:<32} {}",
                e.kind,
                e.metadata.namespace,
                e.metadata.name,
                e.metadata.uid.dimmed()
            );
        }
        println!("\n  {} {} entit(ies)", "→".dimmed(), entities.len());
    })
}

async fn get(ctx: &Context, args: UidArgs) -> anyhow::Result<()> {
    let resp = ctx.client.catalog().entities().get(&args.uid).await?;
    output::emit(ctx.output, resp, print_entity)
}

async fn delete(ctx: &Context, args: UidArgs) -> anyhow::Result<()> {
    let resp = ctx.client.catalog().entities().delete(&args.uid).await?;
    output::ensure_success(resp)?;
    println!("  {} Deleted entity {}", "✓".green().bold(), args.uid.bold());
    Ok(())
}

fn print_entity(entity: &Entity) {
    println!("\n  {}\n", entity.entity_ref().bold());
    field("UID", &entity.metadata.uid);
    field("Title", entity.metadata.title.as_deref().unwrap_or_default());
    field(
        "Description",
        entity.metadata.description.as_deref().unwrap_or_default(),
    );
    field("Tags", &entity.metadata.tags.join(", "));
    if !entity.spec.is_empty() {
        json_block("Spec", &entity.spec);
    }
    for rel in &entity.relations {
        println!("  {} {} {}", "↳".dimmed(), rel.relation_type, rel.target_ref);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order() {
        let order = parse_order("desc:metadata.name").unwrap();
        assert_eq!(order, ListEntityOrder::descending("metadata.name"));
    }

    #[test]
    fn test_parse_order_keeps_unknown_direction() {
        let order = parse_order("up:kind").unwrap();
        assert_eq!(order.direction, "up");
        assert!(order.encode().is_err());
    }

    #[test]
    fn test_parse_order_rejects_missing_parts() {
        assert!(parse_order("metadata.name").is_err());
        assert!(parse_order("asc:").is_err());
    }
}
