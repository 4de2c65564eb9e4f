use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bramble")]
#[command(
    author,
    version,
    about = "A minimal in-memory GraphQL blog API for learning the stack"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to this file in addition to stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long, env = "BRAMBLE_PORT")]
        port: Option<u16>,

        /// Start with an empty store instead of the sample dataset
        #[arg(long)]
        empty: bool,
    },

    /// Print the GraphQL schema in SDL form
    Schema,

    /// Execute a GraphQL document against a fresh in-memory store
    #[command(visible_alias = "q")]
    Query {
        /// The GraphQL document (query or mutation)
        document: String,

        /// Operation variables as a JSON object
        #[arg(long)]
        variables: Option<String>,

        /// Start with an empty store instead of the sample dataset
        #[arg(long)]
        empty: bool,
    },
}
