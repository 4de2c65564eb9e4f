use anyhow::Result;
use clap::Parser;

use bramble::cli::{Cli, Commands};
use bramble::config::BrambleConfig;
use bramble::store::Store;
use bramble::{graphql, logging, server};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    match cli.command {
        Commands::Serve { host, port, empty } => {
            let mut config = BrambleConfig::load(&std::env::current_dir()?)?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let store = if empty || !config.server.seed_fixtures {
                Store::new()
            } else {
                Store::with_fixtures()
            };

            server::serve(&config, store).await?;
            Ok(())
        }
        Commands::Schema => {
            let schema = graphql::build_schema(Store::new());
            println!("{}", schema.sdl());
            Ok(())
        }
        Commands::Query {
            document,
            variables,
            empty,
        } => {
            let store = if empty {
                Store::new()
            } else {
                Store::with_fixtures()
            };
            let schema = graphql::build_schema(store);

            let mut request = async_graphql::Request::new(document);
            if let Some(vars) = variables {
                let json: serde_json::Value = serde_json::from_str(&vars)?;
                request = request.variables(async_graphql::Variables::from_json(json));
            }

            let response = schema.execute(request).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
    }
}
