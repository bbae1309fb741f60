use anyhow::Result;

use super::{CommandContext, execute_document};

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    execute_document(&ctx, &query, variables)
}
