use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use vortex_sim_core::physics::frequency_spectrum;
use vortex_sim_core::{
    create_strategy, load_parameters, render_animation, FourierLayerSynthesizer, FrameSchedule,
    ParameterKey, ParameterOverrides, ParameterSet, ParameterSweep, Seconds, StrategyKind,
    SynthesisStrategy,
};

type DynSynthesizer = FourierLayerSynthesizer<Box<dyn SynthesisStrategy>>;

/// Layered vortex wave-field synthesis
#[derive(Parser, Debug)]
#[command(name = "vortex-sim")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Layered vortex wave-field synthesis", long_about = None)]
struct Args {
    /// Config file (JSON, or YAML for .yaml/.yml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override one option, applied after the config file (repeatable)
    #[arg(short, long = "set", value_name = "KEY=VALUE", global = true)]
    set: Vec<String>,

    /// Time of the static frame in seconds
    #[arg(short, long, default_value_t = 0.0, global = true)]
    time: f64,

    /// Synthesis strategy (tornado, vortex)
    #[arg(long, default_value_t = StrategyKind::Tornado, global = true)]
    strategy: StrategyKind,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Static frame, spectrum table, then the animation (default)
    Run,
    /// Print the frequency spectrum of the configured mode
    Spectrum,
    /// Sweep mode numbers, wavenumbers and times
    Sweep {
        /// Mode numbers m
        #[arg(long, value_delimiter = ',', default_values_t = vec![1, 2, 3, 4])]
        modes: Vec<u32>,
        /// Base wavenumbers k
        #[arg(long, value_delimiter = ',', default_values_t = vec![0.1, 0.2, 0.3])]
        wavenumbers: Vec<f64>,
        /// Time samples in seconds
        #[arg(long, value_delimiter = ',', default_values_t = vec![0.0, 1.0, 2.0])]
        times: Vec<f64>,
    },
    /// Print the effective parameters as JSON
    Config,
    /// List the recognized option names
    Keys,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if matches!(args.command, Some(Command::Keys)) {
        print_keys();
        return Ok(());
    }

    let mut overrides = ParameterOverrides::default();
    for assignment in &args.set {
        overrides.apply_assignment(assignment)?;
    }
    // A bad config file only warns; invalid values are fatal
    let (params, _warning) = load_parameters(args.config.as_deref(), &overrides)?;

    let synthesizer = FourierLayerSynthesizer::new(create_strategy(args.strategy));
    match &args.command {
        None | Some(Command::Run) => run(&params, &synthesizer, Seconds::new(args.time)),
        Some(Command::Spectrum) => print_spectrum(&params),
        Some(Command::Sweep {
            modes,
            wavenumbers,
            times,
        }) => {
            let sweep = ParameterSweep {
                modes: modes.clone(),
                wavenumbers: wavenumbers.clone(),
                times: times.clone(),
            };
            print_sweep(&params, &synthesizer, &sweep)?;
        }
        Some(Command::Config) => {
            let effective = ParameterOverrides::from(&params);
            println!("{}", serde_json::to_string_pretty(&effective)?);
        }
        Some(Command::Keys) => print_keys(),
    }

    Ok(())
}

fn run(params: &ParameterSet, synthesizer: &DynSynthesizer, t: Seconds) {
    println!("=== Vortex Wave-Field Synthesis ===\n");
    print_parameters(params);

    let start = Instant::now();
    let surface = synthesizer.synthesize(params, t);
    println!(
        "\nSynthesized {} layers at t = {} in {:.1?}",
        surface.len(),
        t,
        start.elapsed()
    );
    println!(
        "{:>6} {:>10} {:>12} {:>12} {:>12}",
        "Layer", "Height", "Z min", "Z max", "Max |dZ|"
    );
    for (i, layer) in surface.iter().enumerate() {
        let (lo, hi) = layer.z_range();
        println!(
            "{:>6} {:>10.3} {:>12.5} {:>12.5} {:>12.5}",
            i,
            layer.height,
            lo,
            hi,
            layer.max_displacement()
        );
    }

    println!();
    print_spectrum(params);

    if !params.animation().save_frames {
        println!("\nAnimation disabled (save_frames = false)");
        return;
    }

    let schedule = FrameSchedule::from_parameters(params);
    let start = Instant::now();
    let frames = render_animation(synthesizer, params, &schedule);
    let elapsed = start.elapsed();

    let (lo, hi) = frames
        .iter()
        .filter_map(|frame| frame.surface.z_range())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| {
            (lo.min(a), hi.max(b))
        });
    println!(
        "\nAnimation: {} frames at {} fps over {} in {:.1?}",
        frames.len(),
        params.animation().fps,
        params.animation().duration,
        elapsed
    );
    if !frames.is_empty() {
        println!("Z range across frames: [{:.5}, {:.5}]", lo, hi);
    }
    info!("Run complete");
}

fn print_parameters(params: &ParameterSet) {
    let physical = params.physical();
    let wave = params.wave();
    let grid = params.discretization();
    println!(
        "Physical: Γ={:.3}, σ={:.3}, ρ={:.3}, a={}",
        physical.circulation, physical.surface_tension, physical.density, physical.core_radius
    );
    println!(
        "Wave: m={}, k={:.3}, N={} harmonics, L={} layers",
        wave.mode_number, wave.wavenumber, wave.harmonics, wave.layers
    );
    println!(
        "Grid: r_max={}, z_max={}, {} radial x {} angular samples",
        grid.r_max, grid.z_max, grid.n_r, grid.n_theta
    );
}

fn print_spectrum(params: &ParameterSet) {
    println!("Frequency spectrum (m = {}):", params.wave().mode_number);
    println!("{:>4} {:>10} {:>14}", "n", "k_n", "ω (rad/s)");
    for line in frequency_spectrum(params) {
        println!(
            "{:>4} {:>10.4} {:>14.5}",
            line.harmonic, line.wavenumber, *line.frequency
        );
    }
}

fn print_sweep(
    params: &ParameterSet,
    synthesizer: &DynSynthesizer,
    sweep: &ParameterSweep,
) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();
    let results = sweep.run(synthesizer, params)?;
    println!(
        "Parameter sweep: {} cases in {:.1?}",
        results.len(),
        start.elapsed()
    );
    println!(
        "{:>4} {:>8} {:>8} {:>12} {:>12} {:>12}",
        "m", "k", "t", "ω (rad/s)", "Z min", "Z max"
    );
    for result in &results {
        let (lo, hi) = result.z_range;
        println!(
            "{:>4} {:>8.3} {:>8.3} {:>12.5} {:>12.5} {:>12.5}",
            result.mode, result.wavenumber, *result.time, *result.frequency, lo, hi
        );
    }
    Ok(())
}

fn print_keys() {
    for key in ParameterKey::ALL {
        println!("{:<16} {}", key.name(), key.description());
    }
}
