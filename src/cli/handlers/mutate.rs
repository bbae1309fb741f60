use anyhow::Result;

use super::{CommandContext, execute_document};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // The selection arrives without the operation keyword
    let document = format!("mutation {{ {} }}", mutation);
    execute_document(&ctx, &document, variables)
}
