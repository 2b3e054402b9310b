//! nuturtle_launch CLI

use clap::Parser;
use nuturtle_launch::{pipeline, spec, ResolveOptions};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "nuturtle_launch")]
#[command(about = "Resolve the one-robot visualization pipeline into process specs", long_about = None)]
#[command(version)]
struct Cli {
    /// Launch arguments (key:=value)
    #[arg(value_parser = parse_launch_arg)]
    args: Vec<(String, String)>,

    /// Output file path for the resolved spec batch
    #[arg(short, long, default_value = "processes.json")]
    output: PathBuf,

    /// Templating program used to expand the robot model
    #[arg(long, default_value = "xacro")]
    xacro: String,

    /// Share directory of the description package (skips package lookup)
    #[arg(long)]
    share_dir: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

fn parse_launch_arg(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.split(":=").collect();
    if parts.len() != 2 {
        return Err(format!("Invalid launch argument format: {}", s));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let overrides: HashMap<String, String> = cli.args.into_iter().collect();
    let options = ResolveOptions {
        share_dir: cli.share_dir,
        templating_program: cli.xacro,
    };

    if let Err(e) = resolve_and_write(&overrides, &options, &cli.output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn resolve_and_write(
    overrides: &HashMap<String, String>,
    options: &ResolveOptions,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let specs = pipeline::resolve(overrides, options)?;

    let json = spec::to_json(&specs)?;
    std::fs::write(output, json)?;

    log::info!(
        "Wrote {} process specs to {}",
        specs.len(),
        output.display()
    );
    Ok(())
}
