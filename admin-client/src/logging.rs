//! tracing subscriber setup for binaries and tests embedding the client

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a fmt subscriber, honouring `RUST_LOG` on top of `default_level`.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init(default_level: &str) -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive(format!("admin_client={}", default_level).parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("hyper_util=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    // Already initialised elsewhere
    let _ = fmt().with_env_filter(env_filter).try_init();
    Ok(())
}
