use clap::Parser;
use pg_app::{run_batch_with_progress, AppResult, BatchProgressEvent, BatchRequest, BatchStage};
use pg_core::AirfoilSpec;
use pg_xfoil::XfoilProcess;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "polargen")]
#[command(
    about = "Generate XFOIL lift/drag polars for an airfoil across a Reynolds sweep",
    long_about = None
)]
struct Cli {
    /// Airfoil to analyze: a parametric code ('naca0012') or the name of a
    /// coordinate file, with or without the .dat extension
    airfoil: String,

    /// Run-configuration file (YAML, or JSON by extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Working directory the solver runs in and artifacts land in
    #[arg(short, long, default_value = ".")]
    workdir: PathBuf,

    /// XFOIL executable (overrides the config file)
    #[arg(long)]
    xfoil: Option<PathBuf>,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => pg_project::load(path)?,
        None => pg_project::RunConfig::default(),
    };
    let params = config.sweep_parameters()?;

    let binary = cli
        .xfoil
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.solver.binary));
    let solver = XfoilProcess::new(binary);

    let request = BatchRequest {
        airfoil: AirfoilSpec::parse(&cli.airfoil)?,
        params,
        workdir: cli.workdir.clone(),
    };

    let mut render = |event: BatchProgressEvent| match event.stage {
        BatchStage::GeneratingPolar {
            index,
            total,
            reynolds,
        } => {
            println!("{}/{} - computing polar for Re={:e}", index, total, reynolds);
        }
        BatchStage::CleaningUp => println!("Cleaning up artifacts"),
        _ => {}
    };
    let summary = run_batch_with_progress(&solver, &request, Some(&mut render))?;

    println!(
        "✓ Generated {} polar(s) for {}",
        summary.polars_generated, request.airfoil
    );
    for (from, to) in &summary.cleanup.renamed {
        println!("  {} -> {}", from, to);
    }

    Ok(())
}
