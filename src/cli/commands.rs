use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(
    author,
    version,
    about = "A GraphQL demo API serving a small in-memory library of books and authors"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (defaults to ./bookshelf.toml when present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write structured JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default bookshelf.toml to the current directory
    Init,

    /// Start the GraphQL HTTP server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long, env = "BOOKSHELF_PORT")]
        port: Option<u16>,

        /// IP address to bind (overrides config)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Execute a GraphQL query against the seeded in-memory library
    Query {
        /// Query document to execute
        query: String,

        /// Document variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (the selection is wrapped in 'mutation { }')
    Mutate {
        /// Mutation selection, without the operation keyword
        mutation: String,

        /// Document variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema in SDL form
    Schema,
}
