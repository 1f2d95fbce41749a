//! Main entry point for CLI command to start server.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;

use crate::configuration::generate_config_schema;
use crate::configuration::Configuration;
use crate::http_server::HttpServer;
use crate::schema::build_schema;
use crate::schema::sdl;
use crate::store::EntityStore;
use crate::subscriber;

/// Options for the server
#[derive(Parser, Debug)]
#[command(
    name = "blog-graph",
    about = "In-memory GraphQL server for users, posts and comments",
    version
)]
pub(crate) struct Opt {
    /// Log level (off|error|warn|info|debug|trace).
    #[arg(
        long = "log",
        default_value = "info",
        alias = "log-level",
        env = "BLOG_GRAPH_LOG"
    )]
    log_level: String,

    /// Configuration location relative to the current directory.
    #[arg(short, long = "config", env = "BLOG_GRAPH_CONFIG_PATH")]
    config_path: Option<PathBuf>,

    /// Prints the configuration schema.
    #[arg(long)]
    schema: bool,

    /// Prints the GraphQL schema.
    #[arg(long)]
    sdl: bool,
}

/// This is the main server entrypoint.
pub fn main() -> Result<()> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(nb) = std::env::var("BLOG_GRAPH_NUM_CORES")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
    {
        builder.worker_threads(nb);
    }
    let runtime = builder.build()?;
    runtime.block_on(start(Opt::parse()))
}

async fn start(opt: Opt) -> Result<()> {
    if opt.schema {
        let schema = generate_config_schema();
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    if opt.sdl {
        println!("{}", sdl());
        return Ok(());
    }

    subscriber::init(&opt.log_level)?;

    let configuration = match opt.config_path {
        Some(path) => {
            let path = if path.is_relative() {
                std::env::current_dir()?.join(path)
            } else {
                path
            };
            Configuration::from_file(&path)
                .with_context(|| format!("could not load configuration from {}", path.display()))?
        }
        None => Configuration::default(),
    };

    let store = if configuration.seed() {
        EntityStore::seeded()
    } else {
        EntityStore::default()
    };
    tracing::debug!(
        users = store.user_count(),
        posts = store.post_count(),
        comments = store.comment_count(),
        "entity store ready"
    );

    let server = HttpServer::bind(configuration.server(), build_schema(Arc::new(store)))
        .await
        .with_context(|| format!("could not listen on {}", configuration.server().listen()))?;
    tracing::info!(
        "GraphQL endpoint exposed at http://{}{} 🚀",
        server.local_addr()?,
        configuration.server().path
    );

    if let Err(err) = server.serve(shutdown_signal()).await {
        tracing::error!("{}", err);
        return Err(err.into());
    }
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("could not listen for ctrl-c: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("received ctrl-c, shutting down");
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn it_has_a_valid_command_line() {
        Opt::command().debug_assert();
    }

    #[test]
    fn it_parses_options() {
        let opt = Opt::try_parse_from(["blog-graph", "--log", "debug", "-c", "blog.yaml"]).unwrap();
        assert_eq!(opt.log_level, "debug");
        assert_eq!(opt.config_path, Some(PathBuf::from("blog.yaml")));
        assert!(!opt.schema);
        assert!(!opt.sdl);
    }
}
