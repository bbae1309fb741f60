use anyhow::Result;
use colored::Colorize;

use crate::config::ServerSettings;
use crate::graphql::{build_schema, listen_addr, run_server};

use super::CommandContext;

/// Flag values win over the config file, which wins over the defaults.
fn resolve_binding(
    settings: &ServerSettings,
    port: Option<u16>,
    bind: Option<String>,
) -> (String, u16) {
    (
        bind.unwrap_or_else(|| settings.bind.clone()),
        port.unwrap_or(settings.port),
    )
}

pub fn handle_serve(ctx: CommandContext, port: Option<u16>, bind: Option<String>) -> Result<()> {
    let (bind, port) = resolve_binding(&ctx.config.server, port, bind);
    let addr = listen_addr(&bind, port)?;
    let schema = build_schema(ctx.library.clone(), &ctx.config.limits);

    println!(
        "{} GraphQL server on http://{}/graphql",
        "Starting".green(),
        addr
    );
    println!("GraphiQL explorer: http://{}/graphql", addr);

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, addr).await })?;
    Ok(())
}
