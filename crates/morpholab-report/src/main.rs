//! morpholab - channel, histogram and morphology report generator

use clap::Parser;
use morpholab_core::GrayWeights;
use morpholab_morph::ElementShape;
use morpholab_report::{ReportConfig, config};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "morpholab")]
#[command(version, about = "Channel, histogram and morphology report for three images", long_about = None)]
struct Cli {
    /// Width of synthetic images (px)
    #[arg(long, default_value_t = config::DEFAULT_WIDTH)]
    img_width: u32,

    /// Height of synthetic images (px)
    #[arg(long, default_value_t = config::DEFAULT_HEIGHT)]
    img_height: u32,

    /// Structuring element size; even values are raised to the next odd one
    #[arg(long, default_value_t = config::DEFAULT_KERNEL_SIZE)]
    kernel_size: u32,

    /// Structuring element shape
    #[arg(long, default_value = "rect", value_parser = ["rect", "ellipse", "cross"])]
    element: String,

    /// Directory with photographs (pessoa.*, objeto.*, documento.*); missing ones are synthesized
    #[arg(long, default_value = "input")]
    input_dir: PathBuf,

    /// Directory receiving every exported image
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Seed of the document noise
    #[arg(long, default_value_t = config::DEFAULT_SEED)]
    seed: u64,

    /// Reduce to gray with the channel average instead of luminance
    #[arg(long)]
    average_gray: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn build_config(cli: Cli) -> Result<ReportConfig, String> {
    let element: ElementShape = cli.element.parse().map_err(|e| format!("{e}"))?;
    Ok(ReportConfig {
        width: cli.img_width,
        height: cli.img_height,
        kernel_size: cli.kernel_size,
        element,
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
        gray_weights: if cli.average_gray {
            GrayWeights::AVERAGE
        } else {
            GrayWeights::LUMINANCE
        },
        seed: cli.seed,
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = match build_config(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match morpholab_report::run(&config) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
