use jsrender_core::config::{BuildPlan, PlanFile};
use jsrender_core::error::{Error, Result};
use jsrender_core::logger;
use jsrender_core::renderer::Renderer;

use std::env;
use std::error::Error as StdError;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, crate_description, crate_version};

#[macro_use]
extern crate log;

#[derive(Parser, Debug)]
#[command(
    name = "jsrender",
    about = crate_description!(),
    version = crate_version!(),
)]
struct Args {
    /// Directory containing the templates [default: current directory]
    #[arg(short, long)]
    base_dir: Option<PathBuf>,
    /// Output directory, relative to base dir [default: dist]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    /// YAML build plan overriding outputs, fragments, template suffix or output dir
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Render all templates without writing any file
    #[arg(long)]
    check: bool,
    /// Create the output directory if it does not exist
    #[arg(short = 'p', long)]
    create_dirs: bool,
    /// Verbose mode (-vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Trace all errors recursively
fn trace_all(e: &dyn StdError) {
    trace!(target: "error", "{}", e);
    if let Some(source_error) = e.source() {
        trace_all(source_error)
    }
}

/// End the program with failure, printing [`Error`] and exiting with code 1.
///
/// [`Error`]: ../jsrender_core/error/struct.Error.html
fn crash_error(e: Error) -> ! {
    error!("{}", e);

    if let Some(inner_error) = e.into_inner() {
        if let Some(source_error) = inner_error.source() {
            trace_all(source_error)
        }
    }
    exit(1)
}

fn verbosity(args_verbose: u8) -> u8 {
    if args_verbose != 0 {
        return args_verbose;
    }
    match env::var("JSRENDER_LOG_LEVEL") {
        Ok(s) => match s.as_ref() {
            "DEBUG" => 1,
            "TRACE" => 2,
            _ => 0,
        },
        _ => 0,
    }
}

fn build_plan(args: Args) -> Result<BuildPlan> {
    let base_dir = match args.base_dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };

    let mut plan = BuildPlan::new(base_dir);
    if let Some(config_path) = &args.config {
        plan = plan.merge(PlanFile::from_file(config_path)?);
    }
    if args.output_dir.is_some() {
        plan.output_dir = args.output_dir;
    }
    plan.check_mode = args.check;
    plan.create_output_dir = args.create_dirs;
    Ok(plan)
}

fn main() {
    let args: Args = Args::parse();

    logger::setup_logging(verbosity(args.verbose)).expect("failed to initialize logging.");
    trace!("start logger");
    trace!("{:?}", &args);

    let plan = match build_plan(args) {
        Ok(plan) => plan,
        Err(e) => crash_error(e),
    };
    debug!("templates from {:?}", plan.base_dir);

    match Renderer::new(plan).run() {
        Ok(paths) => debug!("{} files rendered", paths.len()),
        Err(e) => crash_error(e),
    }
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Args::command().debug_assert()
}
