use std::path::PathBuf;

use anyhow::Context;
use cubecam::{config::ViewerConfig, CubeCamApp};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => ViewerConfig::load(&path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    let app = CubeCamApp::new(config).context("starting cubecam")?;
    app.run()?;
    Ok(())
}
