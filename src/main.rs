use std::{env::args, io::stdout};

use anyhow::Context;
use golife::{animate, config::Config, pattern, World};
use tracing::info;

fn run(config: Config) -> anyhow::Result<()> {
    let world = match &config.pattern {
        Some(path) => pattern::load(path)
            .with_context(|| format!("failed to load pattern {}", path.display()))?,
        None => pattern::default_seed(),
    };
    info!(
        population = world.population(),
        generations = config.generations,
        "starting simulation"
    );
    animate_to_stdout(&world, &config)
}

fn animate_to_stdout(world: &World, config: &Config) -> anyhow::Result<()> {
    let mut out = stdout().lock();
    animate(
        &mut out,
        world,
        config.generations,
        &config.window,
        config.pause,
    )
    .context("failed to draw generation")
}

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(args().skip(1)).context("invalid arguments")?;
    run(config)
}
