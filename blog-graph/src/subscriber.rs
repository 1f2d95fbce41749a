//! Global tracing subscriber.
use std::io::IsTerminal;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `log_level` is an [`EnvFilter`] directive such as `info` or
/// `blog_graph=debug`. Output is human readable on a terminal and JSON
/// otherwise.
pub(crate) fn init(log_level: &str) -> Result<()> {
    let builder = tracing_subscriber::fmt::fmt().with_env_filter(
        EnvFilter::try_new(log_level).context("could not parse log configuration")?,
    );

    let installed = if std::io::stdout().is_terminal() {
        builder.try_init()
    } else {
        builder.json().try_init()
    };
    installed.map_err(|err| anyhow!(err))
}
