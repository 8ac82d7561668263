//! lofi-journey CLI
//!
//! Render the fan-app journey wireframes as an HTML gallery, SVG files or JSON.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use humansize::{format_size, BINARY};
use indicatif::{ProgressBar, ProgressStyle};

use lofi_journey::host::{HtmlGallery, JsonDocument, SvgDirectory, INDEX_FILENAME};
use lofi_journey::journey::{default_journey, render_journey_with_progress, RenderSummary};
use lofi_journey::report::{format_checks, format_report};
use lofi_journey::screens::build_screen;
use lofi_journey::spec::ScreenSpec;
use lofi_journey::svg::render_svg;
use lofi_journey::theme::{load_theme, Canvas, Theme};
use lofi_journey::types::{OutputFormat, ScreenKind};
use lofi_journey::validate::check_journey;

#[derive(Parser)]
#[command(name = "lofi-journey")]
#[command(about = "Render low-fidelity wireframes of the fan-app user journey")]
#[command(version)]
struct Cli {
    /// JSON file overriding theme colors
    #[arg(long, global = true)]
    theme: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the whole journey gallery
    Render {
        /// Gallery output format
        #[arg(long, value_enum, default_value = "html")]
        format: GalleryFormatArg,

        /// Output file (html, json) or directory (svg)
        #[arg(long, short)]
        out: Option<PathBuf>,

        /// Format of the summary printed to stdout
        #[arg(long, value_enum, default_value = "human")]
        report: OutputFormatArg,
    },

    /// Print a single screen to stdout
    Screen {
        /// Screen to build
        kind: ScreenKind,

        /// JSON file with the screen's content (default: gallery content)
        #[arg(long)]
        spec: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "svg")]
        format: ScreenFormatArg,
    },

    /// List the screens in journey order
    List,

    /// Build every screen and check frame and bounds invariants
    Check {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum GalleryFormatArg {
    /// One HTML page with inline SVG
    Html,
    /// A directory of SVG files plus index.html
    Svg,
    /// The page and all draw commands as JSON
    Json,
}

impl GalleryFormatArg {
    fn default_output(self) -> PathBuf {
        match self {
            GalleryFormatArg::Html => PathBuf::from("journey.html"),
            GalleryFormatArg::Svg => PathBuf::from("wireframes"),
            GalleryFormatArg::Json => PathBuf::from("journey.json"),
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ScreenFormatArg {
    Svg,
    Json,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = load_canvas(cli.theme.as_deref()).and_then(|canvas| match cli.command {
        Commands::Render { format, out, report } => cmd_render(&canvas, format, out, report.into()),
        Commands::Screen { kind, spec, format } => cmd_screen(&canvas, kind, spec, format),
        Commands::List => cmd_list(),
        Commands::Check { format } => cmd_check(&canvas, format.into()),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Default canvas, with the theme replaced when a theme file is given.
fn load_canvas(theme: Option<&Path>) -> Result<Canvas, String> {
    let theme = match theme {
        Some(path) => load_theme(path)
            .map_err(|e| format!("Cannot load theme {}: {}", path.display(), e))?,
        None => Theme::default(),
    };
    Ok(Canvas::with_theme(theme))
}

// ============================================================================
// PROGRESS HELPERS
// ============================================================================

fn progress_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓░");
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_render(
    canvas: &Canvas,
    format: GalleryFormatArg,
    out: Option<PathBuf>,
    report: OutputFormat,
) -> Result<(), String> {
    let journey = default_journey();
    let path = out.unwrap_or_else(|| format.default_output());
    let show_progress = report == OutputFormat::Human;

    let pb = show_progress.then(|| progress_bar(journey.panel_count() as u64, "Rendering..."));
    let on_progress = |done: usize, _total: usize| {
        if let Some(pb) = &pb {
            pb.set_position(done as u64);
        }
    };

    let summary: RenderSummary = match format {
        GalleryFormatArg::Html => {
            let mut host = HtmlGallery::new(canvas.frame);
            let summary = render_journey_with_progress(&journey, canvas, &mut host, on_progress)
                .map_err(|e| e.to_string())?;
            write_output(&path, &host.into_html())?;
            summary
        }
        GalleryFormatArg::Svg => {
            let mut host = SvgDirectory::new(&path, canvas.frame);
            render_journey_with_progress(&journey, canvas, &mut host, on_progress)
                .map_err(|e| e.to_string())?
        }
        GalleryFormatArg::Json => {
            let mut host = JsonDocument::new();
            let summary = render_journey_with_progress(&journey, canvas, &mut host, on_progress)
                .map_err(|e| e.to_string())?;
            write_output(&path, &host.into_json())?;
            summary
        }
    };

    if let Some(pb) = &pb {
        pb.finish_with_message("Done");
        let written = if format == GalleryFormatArg::Svg {
            path.join(INDEX_FILENAME)
        } else {
            path.clone()
        };
        eprintln!(
            "Wrote {} ({})",
            written.display(),
            format_size(summary.bytes_written, BINARY)
        );
        eprintln!();
    }

    print!("{}", format_report(&summary, report));

    if !summary.failures.is_empty() {
        return Err(format!(
            "{} of {} screens failed to render",
            summary.failures.len(),
            journey.panel_count()
        ));
    }

    Ok(())
}

fn cmd_screen(
    canvas: &Canvas,
    kind: ScreenKind,
    spec_path: Option<PathBuf>,
    format: ScreenFormatArg,
) -> Result<(), String> {
    let spec = match spec_path {
        Some(path) => {
            let spec = read_spec(&path)?;
            if spec.kind() != kind {
                return Err(format!(
                    "{} describes a '{}' screen, not '{}'",
                    path.display(),
                    spec.kind(),
                    kind
                ));
            }
            spec
        }
        None => ScreenSpec::demo(kind),
    };

    let screen = build_screen(&spec, canvas);
    log::debug!("built {} ({} commands)", screen.name, screen.len());

    match format {
        ScreenFormatArg::Svg => print!("{}", render_svg(&screen, &canvas.frame)),
        ScreenFormatArg::Json => {
            let json = serde_json::to_string_pretty(&screen).map_err(|e| e.to_string())?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn cmd_list() -> Result<(), String> {
    let journey = default_journey();
    for section in &journey.sections {
        println!("{}", section.title);
        for (_, panel) in section.columns.panels() {
            let kind = panel.spec.kind();
            match &panel.next {
                Some(next) => println!("  └─ {:<18} {} (next: {})", kind.slug(), panel.spec.title(), next),
                None => println!("  └─ {:<18} {}", kind.slug(), panel.spec.title()),
            }
        }
    }
    Ok(())
}

fn cmd_check(canvas: &Canvas, format: OutputFormat) -> Result<(), String> {
    let checks = check_journey(&default_journey(), canvas);
    print!("{}", format_checks(&checks, format));
    if format == OutputFormat::Json {
        println!();
    }

    let failing = checks.iter().filter(|c| !c.issues.is_empty()).count();
    if failing > 0 {
        return Err(format!("{} screens break layout invariants", failing));
    }
    Ok(())
}

// ============================================================================
// FILE HELPERS
// ============================================================================

fn read_spec(path: &Path) -> Result<ScreenSpec, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    serde_json::from_str(&content).map_err(|e| format!("Invalid spec {}: {}", path.display(), e))
}

fn write_output(path: &Path, contents: &str) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| format!("Cannot create {}: {}", parent.display(), e))?;
    }
    fs::write(path, contents).map_err(|e| format!("Cannot write {}: {}", path.display(), e))
}
