use clap::Parser;
use mersenne_trends::{App, Config, Result};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "mersenne-trends")]
#[command(author, version, about = "Mersenne prime exponent trend analyzer", long_about = None)]
struct Args {
    #[arg(help = "Text file with one exponent per line")]
    input: Option<String>,

    #[arg(long, help = "Headless mode (prediction only, no charts)")]
    headless: bool,

    #[arg(long, help = "Export the dataset to a file (csv or json)", value_name = "FILE")]
    export_data: Option<String>,

    #[arg(short, long, help = "Path to custom config file")]
    config: Option<String>,

    #[arg(short, long, help = "Verbose logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    log::info!("Starting mersenne-trends v{}", env!("CARGO_PKG_VERSION"));

    let config = if let Some(config_path) = &args.config {
        log::info!("Loading config from: {}", config_path);
        Config::load_from(Path::new(config_path))?
    } else {
        Config::load().unwrap_or_default()
    };

    let input_path = args
        .input
        .clone()
        .unwrap_or_else(|| config.input.path.clone());

    // The numeric pipeline runs first so the prediction survives a
    // missing display backend.
    let app = App::new(config, &input_path)?;

    println!("{}", app.prediction);

    if let Some(export_path) = &args.export_data {
        mersenne_trends::export::export_dataset(&app.dataset, export_path)?;
        log::info!("Exported dataset to {}", export_path);
    }

    if !args.headless {
        if let Err(e) = mersenne_trends::tui::run(app) {
            log::warn!("Chart rendering failed (prediction already printed): {}", e);
        }
    }

    Ok(())
}
