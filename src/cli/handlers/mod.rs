mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use std::sync::Arc;

use anyhow::Result;

use crate::config::BookshelfConfig;
use crate::graphql::build_schema;
use crate::store::Library;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
    pub library: Arc<Library>,
}

impl CommandContext {
    pub fn new(config: BookshelfConfig) -> Self {
        Self {
            config,
            library: Arc::new(Library::seeded()),
        }
    }
}

/// Execute one GraphQL document against the context's library and print the
/// pretty JSON response envelope. Shared by the query and mutate commands.
fn execute_document(ctx: &CommandContext, document: &str, variables: Option<String>) -> Result<()> {
    let schema = build_schema(ctx.library.clone(), &ctx.config.limits);

    let vars: async_graphql::Variables = match variables {
        Some(v) => serde_json::from_str(&v)?,
        None => async_graphql::Variables::default(),
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
