use clap::{Args, Parser, Subcommand};
use osc_app::{AppError, AppResult, Session, export_traces, load_and_replay};
use osc_core::{ParamKey, ParameterSet};
use osc_project::SessionDef;
use osc_solver::{SweepSpec, TimeGrid, sweep};
use osc_traces::ExportFormat;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "osc-cli")]
#[command(about = "Damped oscillator explorer - closed-form trajectories and trace comparison", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the regime and trajectory of one parameter set
    Preview {
        #[command(flatten)]
        params: ParamArgs,
        /// Write the curve as CSV (time_s,displacement_m)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replay a session file and compare its frozen traces
    Compare {
        /// Path to the session YAML/JSON file
        session_path: PathBuf,
        /// Export file (csv, json or html; inferred from extension by default)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export format override
        #[arg(long, value_parser = parse_format)]
        format: Option<ExportFormat>,
        /// Title for exported plots
        #[arg(long, default_value = "")]
        title: String,
    },
    /// Sweep one parameter and list the resulting frames
    Sweep {
        #[command(flatten)]
        params: ParamArgs,
        /// Parameter to vary (b, m, k, x0, v0)
        #[arg(long, value_parser = parse_param_key)]
        param: ParamKey,
        /// First swept value
        #[arg(long, allow_negative_numbers = true)]
        min: f64,
        /// Last swept value
        #[arg(long, allow_negative_numbers = true)]
        max: f64,
        /// Number of frames
        #[arg(long, default_value_t = SweepSpec::DEFAULT_FRAMES)]
        frames: usize,
        /// Write all frames as CSV (frame,value,time_s,displacement_m)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a starter session file
    Init {
        /// Destination path (.yaml or .json)
        session_path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct ParamArgs {
    /// Mass (kg)
    #[arg(long, default_value_t = 1.0)]
    m: f64,
    /// Spring constant (N/m)
    #[arg(long, default_value_t = 4.0)]
    k: f64,
    /// Damping coefficient (kg/s)
    #[arg(long, default_value_t = 4.0)]
    b: f64,
    /// Initial position (m)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    x0: f64,
    /// Initial velocity (m/s)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    v0: f64,
    /// Duration (s)
    #[arg(long, default_value_t = 10.0)]
    t_max: f64,
    /// Time grid resolution
    #[arg(long, default_value_t = TimeGrid::DEFAULT_SAMPLES)]
    samples: usize,
}

impl ParamArgs {
    fn to_params(&self) -> AppResult<ParameterSet> {
        Ok(ParameterSet::new(
            self.m, self.k, self.b, self.x0, self.v0, self.t_max,
        )?)
    }
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    s.parse().map_err(|e: osc_traces::ExportError| e.to_string())
}

fn parse_param_key(s: &str) -> Result<ParamKey, String> {
    ParamKey::parse(s).ok_or_else(|| format!("unknown parameter '{s}' (expected b, m, k, x0, v0)"))
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Preview { params, output } => cmd_preview(&params, output.as_deref()),
        Commands::Compare {
            session_path,
            output,
            format,
            title,
        } => cmd_compare(&session_path, output.as_deref(), format, &title),
        Commands::Sweep {
            params,
            param,
            min,
            max,
            frames,
            output,
        } => cmd_sweep(&params, param, min, max, frames, output.as_deref()),
        Commands::Init {
            session_path,
            force,
        } => cmd_init(&session_path, force),
    }
}

fn cmd_preview(args: &ParamArgs, output: Option<&Path>) -> AppResult<()> {
    let session = Session::with_params(args.to_params()?, args.samples)?;
    let preview = session.preview();
    let displacement = preview.curve.displacement();

    println!("Δ = b² - 4mk");
    println!("  Discriminant: {:.3}", preview.discriminant);
    println!("  Damping type: {}", preview.regime());
    println!("  Samples: {} over {:.3} s", preview.grid.len(), preview.grid.t_max());
    if let Some(peak) = displacement.iter().map(|x| x.abs()).reduce(f64::max) {
        println!("  Peak |x|: {:.4} m", peak);
    }
    if let Some(last) = displacement.last() {
        println!("  x(t_max): {:.4} m", last);
    }

    if let Some(path) = output {
        let mut csv = String::from("time_s,displacement_m\n");
        for (t, x) in preview.curve.points() {
            csv.push_str(&format!("{},{}\n", t, x));
        }
        write_file(path, csv)?;
        println!("✓ Exported {} data points to {}", preview.curve.len(), path.display());
    }

    Ok(())
}

fn cmd_compare(
    session_path: &Path,
    output: Option<&Path>,
    format: Option<ExportFormat>,
    title: &str,
) -> AppResult<()> {
    println!("Replaying session: {}", session_path.display());
    let (def, session) = load_and_replay(session_path)?;

    println!("\n{} ({} actions)", def.name, def.actions.len());
    let traces = session.traces().all();
    if traces.is_empty() {
        println!("No traces frozen");
    } else {
        println!("Traces:");
        for record in traces {
            println!("  [{}] {}", record.sequence_index(), record.label());
        }
    }

    if let Some(path) = output {
        let title = if title.is_empty() { def.name.as_str() } else { title };
        let format = export_traces(session.traces(), path, format, title)?;
        println!(
            "✓ Exported {} traces as {} to {}",
            traces.len(),
            format,
            path.display()
        );
    }

    Ok(())
}

fn cmd_sweep(
    args: &ParamArgs,
    key: ParamKey,
    min: f64,
    max: f64,
    frames: usize,
    output: Option<&Path>,
) -> AppResult<()> {
    let base = args.to_params()?;
    let spec = SweepSpec::new(key, min, max, frames)?;
    let grid = TimeGrid::new(base.t_max, args.samples);
    let frames = sweep(&base, &spec, &grid)?;

    println!("{}", spec);
    for (i, frame) in frames.iter().enumerate() {
        println!("  [{:>3}] {}  ({})", i, frame.title, frame.curve.regime());
    }

    if let Some(path) = output {
        let mut csv = String::from("frame,value,time_s,displacement_m\n");
        for (i, frame) in frames.iter().enumerate() {
            for (t, x) in frame.curve.points() {
                csv.push_str(&format!("{},{},{},{}\n", i, frame.value, t, x));
            }
        }
        write_file(path, csv)?;
        println!("✓ Exported {} frames to {}", frames.len(), path.display());
    }

    Ok(())
}

fn cmd_init(session_path: &Path, force: bool) -> AppResult<()> {
    if session_path.exists() && !force {
        return Err(AppError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            session_path.display()
        )));
    }
    osc_project::save_session(session_path, &SessionDef::example())?;
    println!("✓ Wrote starter session to {}", session_path.display());
    Ok(())
}

fn write_file(path: &Path, content: String) -> AppResult<()> {
    std::fs::write(path, content).map_err(|source| AppError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
