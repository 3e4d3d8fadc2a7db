use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tw_cavity::{CavityPreset, ImpulseResponse, TravellingWaveCavity};
use tw_project::{ProjectResult, build_cavity, compute_response, find_cavity};

#[derive(Parser)]
#[command(name = "tw-cli")]
#[command(about = "TravelWake CLI - travelling wave cavity impulse responses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate cavity configuration syntax and values
    Validate {
        /// Path to the configuration YAML file
        config_path: PathBuf,
    },
    /// List built-in cavity presets
    Presets,
    /// Show derived constants of every configured cavity
    Cavities {
        /// Path to the configuration YAML file
        config_path: PathBuf,
    },
    /// Compute an impulse response and print a summary
    Response {
        /// Path to the configuration YAML file
        config_path: PathBuf,
        /// Cavity ID to evaluate
        cavity_id: String,
        /// Carrier offset from the cavity central frequency, overrides the file
        #[arg(long)]
        offset_hz: Option<f64>,
    },
}

fn main() -> ProjectResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Presets => cmd_presets(),
        Commands::Cavities { config_path } => cmd_cavities(&config_path),
        Commands::Response {
            config_path,
            cavity_id,
            offset_hz,
        } => cmd_response(&config_path, &cavity_id, offset_hz),
    }
}

fn cmd_validate(config_path: &Path) -> ProjectResult<()> {
    println!("Validating configuration: {}", config_path.display());
    let project = tw_project::load_yaml(config_path)?;
    for def in &project.cavities {
        build_cavity(def)?;
    }
    println!("✓ Configuration is valid");
    Ok(())
}

fn cmd_presets() -> ProjectResult<()> {
    println!("Built-in cavity presets:");
    for preset in CavityPreset::ALL {
        let cavity = preset.build()?;
        println!(
            "  {} ({} cells, filling time {:.4e} s)",
            preset,
            preset.n_cells(),
            cavity.filling_time().value
        );
    }
    Ok(())
}

fn cmd_cavities(config_path: &Path) -> ProjectResult<()> {
    let project = tw_project::load_yaml(config_path)?;

    if project.cavities.is_empty() {
        println!("No cavities found in configuration");
        return Ok(());
    }

    println!("Cavities in '{}':", project.name);
    for def in &project.cavities {
        let cavity = build_cavity(def)?;
        println!("  {} - {}", def.id, def.name);
        print_cavity(&cavity);
    }
    Ok(())
}

fn cmd_response(config_path: &Path, cavity_id: &str, offset_hz: Option<f64>) -> ProjectResult<()> {
    let mut project = tw_project::load_yaml(config_path)?;
    if let Some(offset_hz) = offset_hz {
        project.carrier.offset_hz = offset_hz;
    }
    let def = find_cavity(&project, cavity_id)?;
    println!("Impulse response for cavity: {} - {}", def.id, def.name);
    println!("  carrier offset = {:.3} Hz", project.carrier.offset_hz);

    let start = Instant::now();
    let response = compute_response(&project, cavity_id)?;
    let elapsed = start.elapsed().as_secs_f64();

    print_response(&response);
    println!("  Computed in {:.3} ms", elapsed * 1e3);
    Ok(())
}

fn print_cavity(cavity: &TravellingWaveCavity) {
    println!("    cells:             {}", cavity.n_cells());
    println!("    cavity length:     {:.4} m", cavity.cavity_length().value);
    println!(
        "    group velocity:    {:.4} c",
        cavity.group_velocity().value
    );
    println!("    filling time:      {:.4e} s", cavity.filling_time().value);
    println!("    R_beam:            {:.4e} Ohm", cavity.r_beam().value);
    println!("    R_gen:             {:.4e} Ohm", cavity.r_gen().value);
}

fn print_response(response: &ImpulseResponse) {
    println!("  Samples:           {}", response.len());
    println!("  d_omega:           {:.4e} rad/s", response.d_omega);
    println!("  peak |hs_beam|:    {:.4e} Ohm/s", response.peak_beam());
    println!("  peak |hs_gen|:     {:.4e} Ohm/s", response.peak_gen());
    match (
        response.peak_quadrature_beam(),
        response.peak_quadrature_gen(),
    ) {
        (Some(hc_beam), Some(hc_gen)) => {
            println!("  Quadrature:        present");
            println!("  peak |hc_beam|:    {:.4e} Ohm/s", hc_beam);
            println!("  peak |hc_gen|:     {:.4e} Ohm/s", hc_gen);
        }
        _ => println!("  Quadrature:        none (carrier on resonance)"),
    }
}
