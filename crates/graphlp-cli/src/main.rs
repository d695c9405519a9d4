mod input;
mod report;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use graphlp_solver::Solver;

#[derive(Parser)]
#[command(name = "graphlp")]
#[command(about = "Solve two-variable linear programs by corner-point enumeration", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Disable logging
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a problem file and print the optimum
    Solve {
        /// The JSON problem file
        file: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
        /// List every feasible vertex
        #[arg(long)]
        vertices: bool,
    },
    /// Load and normalize a problem file without solving it
    Check {
        /// The JSON problem file
        file: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Pretty,
    Json,
}

fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        std::process::exit(1);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Solve { file, format, vertices } => {
            let doc = match input::load(&file) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };

            let constraints = doc.constraint_set();
            if constraints.len() < 2 {
                tracing::warn!(
                    half_planes = constraints.len(),
                    "at least one valid constraint is usually needed"
                );
            }

            let solved = doc.solve(&Solver::new());
            tracing::info!(
                vertices = solved.result.vertices.len(),
                feasible = solved.result.feasible,
                "solved {}",
                file.display()
            );

            match format {
                Format::Json => match report::render_json(&solved) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error serializing result: {}", e);
                        std::process::exit(1);
                    }
                },
                Format::Pretty => print!("{}", report::render_pretty(&solved, vertices)),
            }

            if !solved.result.feasible {
                std::process::exit(1);
            }
        }
        Commands::Check { file } => {
            let doc = match input::load(&file) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("✗ {} has errors:", file.display());
                    eprintln!("  {}", e);
                    std::process::exit(1);
                }
            };

            let constraints = doc.constraint_set();
            let tolerance = Solver::new().tolerances().determinant;
            let degenerate: Vec<_> = constraints
                .iter()
                .filter(|p| p.is_degenerate(tolerance))
                .collect();

            println!("✓ {} is valid", file.display());
            println!("  {} rows", doc.constraints.len());
            println!("  {} half-planes", constraints.len());
            println!("  {} lines to draw", constraints.labeled().count());
            if !degenerate.is_empty() {
                println!("  {} degenerate constraints (no boundary line):", degenerate.len());
                for p in degenerate {
                    println!("    {}", p.label());
                }
            }
        }
    }
}
