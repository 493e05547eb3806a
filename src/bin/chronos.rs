use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use chrono::{Datelike as _, NaiveDate};
use clap::{Parser, Subcommand};

use chronos::{
    CalendarDevice, CalendarRequest, CompletedDays, FontSet, ProgressDevice, ProgressRequest,
    QuoteCache, RenderRequest, ServiceConfig, Shape, Theme, WallpaperEngine,
};

#[derive(Parser, Debug)]
#[command(name = "chronos", version, about = "Calendar and year-progress wallpaper renderer")]
struct Cli {
    /// JSON service config; flags below override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory with LiberationSans (or other) font files.
    #[arg(long, global = true)]
    fonts_dir: Option<PathBuf>,

    /// Quotes CSV (`"text","author"` rows after a header line).
    #[arg(long, global = true)]
    quotes: Option<PathBuf>,

    /// Log at DEBUG level.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a month calendar PNG.
    Calendar(CalendarArgs),
    /// Render a year-progress PNG (or SVG).
    Progress(ProgressArgs),
    /// Run the HTTP service.
    Serve(ServeArgs),
}

#[derive(Parser, Debug)]
struct CalendarArgs {
    /// Year to render (defaults to the current year).
    #[arg(long)]
    year: Option<i32>,

    /// `laptop` or `mobile`.
    #[arg(long, default_value = "laptop")]
    device: CalendarDevice,

    /// Comma-separated ISO dates or day-of-year numbers to mark completed.
    #[arg(long, default_value = "")]
    completed: String,

    /// `circle`, `square` or `rounded`.
    #[arg(long, default_value = "circle")]
    shape: Shape,

    /// Output PNG path (defaults to `calendar-{year}-{device}.png`).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ProgressArgs {
    /// Reference date, `YYYY-MM-DD` (defaults to today).
    #[arg(long)]
    date: Option<NaiveDate>,

    /// IANA time zone used to pick today's date, e.g. `Asia/Tokyo`.
    #[arg(long)]
    timezone: Option<String>,

    /// `desktop`, `mobile` or `iphone-lock`.
    #[arg(long, default_value = "desktop")]
    device: ProgressDevice,

    /// `cyber`, `swiss`, `deep`, `slate` or `space`.
    #[arg(long, default_value = "cyber")]
    theme: Theme,

    /// Cell shape (defaults per device).
    #[arg(long)]
    shape: Option<Shape>,

    /// Output path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write the SVG document instead of a PNG.
    #[arg(long)]
    svg: bool,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Listen address, e.g. `0.0.0.0:3000`.
    #[arg(long)]
    bind: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => ServiceConfig::from_json_file(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => ServiceConfig::default(),
    };
    if let Some(dir) = cli.fonts_dir {
        config.fonts_dir = Some(dir);
    }
    if let Some(csv) = cli.quotes {
        config.quotes_csv = Some(csv);
    }

    match cli.cmd {
        Command::Calendar(args) => cmd_calendar(&config, args),
        Command::Progress(args) => cmd_progress(&config, args),
        Command::Serve(args) => cmd_serve(config, args),
    }
}

fn make_engine(config: &ServiceConfig) -> anyhow::Result<WallpaperEngine> {
    let fonts = FontSet::discover(config.fonts_dir.as_deref()).context("discover fonts")?;
    let quotes = Arc::new(QuoteCache::new(config.quotes_csv.clone(), config.quote_ttl()));
    Ok(WallpaperEngine::new(fonts, quotes))
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn today_in(zone: Option<&str>) -> NaiveDate {
    chronos::request::params::today_in(zone, chrono::Utc::now(), today())
}

fn cmd_calendar(config: &ServiceConfig, args: CalendarArgs) -> anyhow::Result<()> {
    let req = CalendarRequest::new(
        args.year.unwrap_or_else(|| today().year()),
        args.device,
        CompletedDays::parse_list(&args.completed),
        args.shape,
    )?;
    let out = args.out.unwrap_or_else(|| PathBuf::from(req.file_name()));

    let engine = make_engine(config)?;
    let png = engine.generate(&RenderRequest::from(req))?;
    write_output(&out, &png)
}

fn cmd_progress(config: &ServiceConfig, args: ProgressArgs) -> anyhow::Result<()> {
    let shape = args.shape.unwrap_or(args.device.default_shape());
    let req = ProgressRequest::new(
        args.date.unwrap_or_else(|| today_in(args.timezone.as_deref())),
        args.device,
        args.theme,
        shape,
    )?;
    let default_name = if args.svg {
        req.file_name().replace(".png", ".svg")
    } else {
        req.file_name()
    };
    let out = args.out.unwrap_or_else(|| PathBuf::from(default_name));

    let engine = make_engine(config)?;
    let req = RenderRequest::from(req);
    if args.svg {
        let svg = engine.generate_svg(&req)?;
        write_output(&out, svg.as_bytes())
    } else {
        let png = engine.generate(&req)?;
        write_output(&out, &png)
    }
}

fn cmd_serve(mut config: ServiceConfig, args: ServeArgs) -> anyhow::Result<()> {
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    config.validate().context("invalid service config")?;

    let engine = make_engine(&config)?;
    let state = chronos::server::AppState::new(engine, config);
    let runtime = tokio::runtime::Runtime::new().context("start tokio runtime")?;
    runtime.block_on(chronos::server::serve(state))?;
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
