use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

use plz_streets::api::{HttpOsmClient, ThreadPause};
use plz_streets::config::Config;
use plz_streets::pipeline::Pipeline;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let start = Instant::now();

    println!("plz-streets - Street Lookup Builder");
    println!("===================================");
    println!();

    let config = Config::load();
    config.validate().context("Invalid configuration")?;

    let client = HttpOsmClient::new(&config)?;
    let pipeline = Pipeline::new(&config, &client, &ThreadPause)
        .with_progress(create_progress(config.postal_codes.len() as u64));

    let index = pipeline.run()?;

    println!();
    println!(
        "Done! Wrote {} ({} postal codes, total streets: {}) [{:.1}s]",
        config.output.display(),
        index.len(),
        index.total_streets(),
        start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn create_progress(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ")
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
