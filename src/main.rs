use anyhow::{Context, Result};
use linesort::{Config, Sort};
use tracing::level_filters::LevelFilter;

fn setup_tracing(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let config = Config::default();
    setup_tracing(config.log_level);

    let sort = Sort::new(config);
    sort.run().with_context(|| {
        format!(
            "failed to sort {} into {}",
            sort.config().input.display(),
            sort.config().output.display()
        )
    })?;
    Ok(())
}
