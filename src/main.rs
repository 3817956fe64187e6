//! gostrap's main application entry point and orchestration logic.
//! Collects command-line inputs, resolves the variable context and drives
//! the generation engine, rendering progress and the next-steps summary.

use colored::Colorize;
use gostrap::{
    cli::{get_args, Args},
    context::VariableContext,
    error::{default_error_handler, Result},
    generator::{Generator, Progress, ProgressReporter},
    identity,
    logger::init_logger,
    manifest::Manifest,
    renderer::PlaceholderRenderer,
    store::EmbeddedStore,
};

/// Prints one line per written file with the run fraction.
struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn written(&mut self, progress: &Progress) {
        println!(
            "  [{}/{}] {}",
            progress.completed,
            progress.total,
            progress.dest.display()
        );
    }
}

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Builds the variable context for this run: flag values win, then git
/// identity, then the documented defaults.
fn build_context(args: &Args) -> VariableContext {
    let mut context = VariableContext::new(args.name.clone());

    if let Some(module_path) = &args.module_path {
        context.module_path = module_path.clone();
    }
    if let Some(description) = &args.description {
        context.description = description.clone();
    }

    let (git_name, git_email) = identity::default_identity();
    context.author_name = args.author.clone().or(git_name).unwrap_or_default();
    context.author_email = args.email.clone().or(git_email).unwrap_or_default();

    context.database_type = args.database;
    context.redis_enabled = !args.no_redis;
    context.metrics_enabled = !args.no_metrics;
    context.pprof_enabled = !args.no_pprof;

    context
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the variable context from arguments and git identity
/// 2. Selects the built-in manifest variant for the chosen features
/// 3. Runs the generator against the bundled template store
/// 4. Prints the next-steps summary
fn run(args: Args) -> Result<()> {
    println!("Creating project {}...", args.name.bold());

    let context = build_context(&args);
    let manifest = Manifest::builtin(&context);
    let store = EmbeddedStore::new();
    let renderer = PlaceholderRenderer::new();
    let generator = Generator::new(&store, &renderer);

    let report =
        generator.generate(&context, &manifest, &args.target, &mut ConsoleReporter)?;

    println!(
        "\n{} Project '{}' created successfully! ({} files)",
        "✓".green(),
        context.project_name,
        report.files_written.len()
    );
    println!("\nNext steps:");
    println!("  cd {}", context.project_name);
    println!("  go mod tidy");
    println!("  go run .");

    println!("\nDon't forget to:");
    println!("  - Update database credentials in config/config.yml");
    println!("  - Change the JWT secret in config/config.yml");
    if context.redis_enabled {
        println!("  - Start a Redis server");
    }

    Ok(())
}
