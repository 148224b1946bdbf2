use activity_charts::{ChartRenderer, DashboardInput, RenderOptions, ViewController};
use activity_charts::{page, storage};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "activity-charts",
    version,
    about = "Render location/station activity series as a Chart.js dashboard"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the dashboard (HTML page and/or JSON bundle).
    Render(RenderArgs),
    /// Replay legend clicks on the primary chart and print the title after each.
    Toggle(ToggleArgs),
    /// Export the location series as CSV.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input JSON: {location_data, station_data, weekday_totals}
    #[arg(short, long)]
    input: PathBuf,
    /// Input is nested: {locations: {location: {station: [points]}}, weekday_totals}
    #[arg(long, default_value_t = false)]
    tree: bool,
    /// Override weekday totals, comma or semicolon separated (Monday first).
    #[arg(long)]
    weekday: Option<String>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Write the HTML page here.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Write the chart configurations as JSON here.
    #[arg(long)]
    json: Option<PathBuf>,
    /// Render options JSON (missing keys keep defaults).
    #[arg(long)]
    options: Option<PathBuf>,
    /// Seed for dataset colors.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct ToggleArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Dataset indices clicked, in order.
    clicks: Vec<usize>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    input: InputArgs,
    /// CSV output path.
    #[arg(long)]
    csv: PathBuf,
}

fn parse_list(s: &str) -> Result<Vec<f64>> {
    s.split([',', ';'])
        .map(|x| x.trim())
        .filter(|x| !x.is_empty())
        .map(|x| {
            x.parse::<f64>()
                .with_context(|| format!("invalid weekday total {x:?}"))
        })
        .collect()
}

fn load(args: &InputArgs) -> Result<DashboardInput> {
    let path = args.input.as_path();
    let mut input = if args.tree {
        storage::load_tree(path)
            .with_context(|| format!("read {}", path.display()))?
            .into_input()?
    } else {
        storage::load_input(path).with_context(|| format!("read {}", path.display()))?
    };
    if let Some(s) = &args.weekday {
        input.weekday_totals = parse_list(s)?;
    }
    log::info!(
        "loaded {} locations, {} station views from {}",
        input.location_data.len(),
        input.station_data.len(),
        path.display()
    );
    Ok(input)
}

fn load_options(path: Option<&Path>, seed: Option<u64>) -> Result<RenderOptions> {
    let mut options = match path {
        Some(p) => RenderOptions::from_json_file(p)
            .with_context(|| format!("read options {}", p.display()))?,
        None => RenderOptions::default(),
    };
    if seed.is_some() {
        options.seed = seed;
    }
    Ok(options)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Toggle(args) => cmd_toggle(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let input = load(&args.input)?;
    let options = load_options(args.options.as_deref(), args.seed)?;
    let dashboard = ChartRenderer::new(options.clone()).render(&input)?;

    if let Some(path) = args.json.as_ref() {
        storage::save_dashboard_json(&dashboard, path)?;
        eprintln!("Wrote chart configurations to {}", path.display());
    }
    match args.out.as_ref() {
        Some(path) => {
            fs::write(path, page::render_page(&dashboard, &options)?)
                .with_context(|| format!("write {}", path.display()))?;
            eprintln!("Wrote dashboard page to {}", path.display());
        }
        None if args.json.is_none() => {
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
        }
        None => {}
    }
    Ok(())
}

fn cmd_toggle(args: ToggleArgs) -> Result<()> {
    let input = load(&args.input)?;
    let options = load_options(None, Some(0))?;
    let dashboard = ChartRenderer::new(options.clone()).render(&input)?;
    let mut view = ViewController::from_dashboard(&dashboard, options);
    println!("{}", view.title());
    for i in args.clicks {
        view.toggle(i)
            .with_context(|| format!("legend click at index {i}"))?;
        println!("{}", view.title());
    }
    Ok(())
}

fn cmd_export(args: ExportArgs) -> Result<()> {
    let input = load(&args.input)?;
    input.validate()?;
    storage::save_series_csv(&input.location_data, &args.csv)?;
    eprintln!(
        "Saved {} series to {}",
        input.location_data.len(),
        args.csv.display()
    );
    Ok(())
}
