use anyhow::Context;
use clap::Parser;
use rand::prelude::*;

mod app;
mod command;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about = "Clear the board without setting off a mine", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,

    /// Board to start from
    #[arg(short, long, value_enum, default_value_t)]
    preset: settings::Preset,

    /// Number of rows, overrides the preset
    #[arg(short, long, allow_negative_numbers = true)]
    rows: Option<i64>,

    /// Number of columns, overrides the preset
    #[arg(short, long, allow_negative_numbers = true)]
    cols: Option<i64>,

    /// Number of mines, overrides the preset
    #[arg(short, long, allow_negative_numbers = true)]
    mines: Option<i64>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let config = settings::with_overrides(args.preset, args.rows, args.cols, args.mines)
        .context("Could not start a game with these settings")?;
    log::debug!("seed: {:?}", args.seed);

    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut app = app::App::new(config, rng);
    println!("{}", command::HELP);
    app.run(std::io::stdin().lock(), &mut std::io::stdout().lock())
        .context("Terminal I/O failed")?;

    log::debug!("Bye");
    Ok(())
}
