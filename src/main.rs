use clap::Parser;
use log::{debug, error, info};
use std::path::PathBuf;
use std::process;

use webm_dr::command::{self, SystemRunner};
use webm_dr::config::{Config, ResizeMode};
use webm_dr::error::{Result, WebmDrError};
use webm_dr::pipeline::Pipeline;

#[derive(Parser, Debug)]
#[command(author, version, about = "Produce a WebM whose resolution changes from frame to frame", long_about = None)]
struct Cli {
    /// Path of input file. Only the first is used if several are given.
    #[arg(value_name = "INPUT_PATH", required = true, num_args = 1..)]
    input_path: Vec<PathBuf>,

    /// 1 = random, 2 = growing
    #[arg(short, long, default_value_t = 1)]
    mode: u8,

    /// Path to write the output file to (must end in .webm)
    #[arg(short, long, value_name = "OUTPUT_PATH")]
    output_path: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    webm_dr::logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{}", e);
        // ffmpeg's own exit code is propagated verbatim; everything else is 1
        let code = match e {
            WebmDrError::ExternalTool { code, .. } if code > 0 => code,
            _ => 1,
        };
        process::exit(code);
    }
}

fn run(cli: &Cli) -> Result<()> {
    info!("webm-dr v{} starting up", webm_dr::VERSION);

    let mode = ResizeMode::from_selector(cli.mode)?;
    let config = Config::new(mode, cli.input_path[0].clone(), cli.output_path.clone());
    config.validate()?;
    debug!("Configuration: {:?}", config);

    command::check_dependency("ffmpeg")?;

    // The working directory lives exactly as long as the pipeline value;
    // it is removed on every path out of this function.
    let pipeline = Pipeline::new(config, SystemRunner)?;
    pipeline.run()?;

    info!("webm-dr completed successfully");
    Ok(())
}
