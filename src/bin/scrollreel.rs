use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "scrollreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample every section of a site at one scroll position and print JSON.
    Sample(SampleArgs),
    /// Sample one section across its input domain and print JSON frames.
    Curve(CurveArgs),
    /// Rasterise a particle field at a point in time as a PNG.
    Particles(ParticlesArgs),
    /// List section names.
    Sections,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Site config JSON. Defaults to the built-in homepage layout.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Vertical scroll offset in pixels.
    #[arg(long, default_value_t = 0.0)]
    scroll: f64,

    /// Seconds of spring settling before sampling.
    #[arg(long, default_value_t = 0.0)]
    settle: f64,
}

#[derive(Parser, Debug)]
struct CurveArgs {
    /// Section name, e.g. `hero` or `manifesto`.
    #[arg(long)]
    section: String,

    /// Number of evenly spaced samples.
    #[arg(long, default_value_t = 11)]
    steps: usize,
}

#[derive(Parser, Debug)]
struct ParticlesArgs {
    /// Field preset: starfield, embers, leaves or nodes.
    #[arg(long)]
    field: String,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Seconds since the field mounted.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 360)]
    height: u32,

    /// Background colour (`#rrggbb`, `rgb(...)` ...).
    #[arg(long, default_value = "#050505")]
    background: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Curve(args) => cmd_curve(args),
        Command::Particles(args) => cmd_particles(args),
        Command::Sections => {
            for kind in scrollreel::SectionKind::ALL {
                println!("{kind}");
            }
            Ok(())
        }
    }
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let cfg = match &args.config {
        Some(path) => scrollreel::SiteConfig::from_path(path)
            .with_context(|| format!("load site config '{}'", path.display()))?,
        None => scrollreel::SiteConfig::homepage(),
    };

    let mut site = scrollreel::Site::from_config(&cfg).context("build site")?;
    site.scroll_to(args.scroll);
    site.settle(args.settle).context("settle springs")?;

    let frame = site.sample();
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}

fn cmd_curve(args: CurveArgs) -> anyhow::Result<()> {
    let kind = scrollreel::SectionKind::from_name(&args.section)?;
    let section = kind.build().with_context(|| format!("build section '{kind}'"))?;
    let frames = section.curve(args.steps)?;
    println!("{}", serde_json::to_string_pretty(&frames)?);
    Ok(())
}

fn cmd_particles(args: ParticlesArgs) -> anyhow::Result<()> {
    let kind = scrollreel::FieldKind::parse(&args.field)?;
    let background = scrollreel::Rgba8::parse(&args.background)?;
    let field = scrollreel::ParticleField::preset(kind, args.seed)
        .with_context(|| format!("generate '{kind}' field"))?;

    let canvas = scrollreel::Canvas {
        width: args.width,
        height: args.height,
    };
    let frame = scrollreel::rasterize_field(&field, args.time, canvas, background)?;

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    frame
        .save_png(&args.out)
        .with_context(|| format!("write '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
