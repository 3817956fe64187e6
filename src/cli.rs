//! Command-line interface implementation for gostrap.
//! Provides argument parsing and help text formatting using clap.

use crate::context::DatabaseType;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for gostrap.
#[derive(Parser, Debug)]
#[command(author, version, about = "gostrap: Go web project scaffolding tool", long_about = None)]
pub struct Args {
    /// Name of the project to create
    #[arg(value_name = "PROJECT_NAME")]
    pub name: String,

    /// Go module path (default: github.com/user/<project-name>)
    #[arg(long, value_name = "MODULE_PATH")]
    pub module_path: Option<String>,

    /// Author name (default: git config user.name)
    #[arg(long)]
    pub author: Option<String>,

    /// Author email (default: git config user.email)
    #[arg(long)]
    pub email: Option<String>,

    /// Project description
    #[arg(long)]
    pub description: Option<String>,

    /// Database backend for the generated project
    #[arg(long, value_enum, default_value = "mysql")]
    pub database: DatabaseType,

    /// Disable Redis cache wiring
    #[arg(long)]
    pub no_redis: bool,

    /// Disable Prometheus metrics wiring
    #[arg(long)]
    pub no_metrics: bool,

    /// Disable pprof profiling wiring
    #[arg(long)]
    pub no_pprof: bool,

    /// Directory the project is created under
    #[arg(long, default_value = ".")]
    pub target: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
