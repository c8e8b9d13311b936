//! Plottheme - palette, theme settings and figure export from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use plottheme::export::StepOutcome;
use plottheme::palette::palette_colors;
use plottheme::{colour_palette, configure_theme, Chart, ExportRequest, PlotContext, Series};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "plottheme")]
#[command(about = "Plot theme palette, settings and figure export", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable logging to specified file
    #[arg(long, global = true)]
    log: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print palette colors, one per line
    Palette {
        /// Number of colors to print
        #[arg(short = 'n', long, default_value_t = 9, allow_negative_numbers = true)]
        num_colors: i64,

        /// Also copy the colors to the clipboard
        #[arg(long)]
        copy: bool,

        /// Print colors as `r g b` triples
        #[arg(long)]
        rgb: bool,
    },

    /// Print the configured theme settings
    Theme {
        /// Turn the grid on
        #[arg(long)]
        grid: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw a sample chart with the theme and export it
    Demo {
        /// Turn the grid on
        #[arg(long)]
        grid: bool,

        /// File name without extension
        #[arg(long, default_value = "img")]
        name: String,

        /// Output folder; empty skips writing a file
        #[arg(long, default_value = "image_out/")]
        folder: String,

        /// Output format (png, jpg, bmp, svg)
        #[arg(long, default_value = "png")]
        format: String,

        /// Resolution in dots per inch
        #[arg(long, default_value_t = 300)]
        dpi: u32,

        /// Skip copying the figure to the clipboard
        #[arg(long)]
        no_clipboard: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_ref())?;

    match args.command {
        Command::Palette {
            num_colors,
            copy,
            rgb,
        } => {
            let colors = colour_palette(num_colors);
            if rgb {
                for c in palette_colors(num_colors) {
                    println!("{} {} {}", c.r, c.g, c.b);
                }
            } else {
                for color in &colors {
                    println!("{}", color);
                }
            }
            if copy {
                if let Err(e) = plottheme::clipboard::copy_to_clipboard(&colors.join("\n")) {
                    eprintln!("Copy failed: {}", e);
                }
            }
        }
        Command::Theme { grid, json } => {
            let theme = configure_theme(grid);
            if json {
                println!("{}", serde_json::to_string_pretty(&theme)?);
            } else {
                println!("style: {} ({})", theme.style.name(), theme.base_style.name());
                println!("{:#?}", theme);
            }
        }
        Command::Demo {
            grid,
            name,
            folder,
            format,
            dpi,
            no_clipboard,
        } => {
            let mut ctx = PlotContext::init();
            ctx.configure_theme(grid);
            ctx.set_figure(demo_chart());
            let style = format!("{} / {}", ctx.theme.style.name(), ctx.theme.base_style.name());
            if let Some(chart) = ctx.figure_mut() {
                chart.suptitle = Some(style);
            }

            let request = ExportRequest {
                copy_to_clipboard: !no_clipboard,
                name,
                folder,
                file_type: format,
                dpi,
            };
            let report = ctx.save_plot(&request);
            println!("file: {}", describe(&report.file));
            println!("clipboard: {}", describe(&report.clipboard));
        }
    }

    Ok(())
}

fn init_logging(log: Option<&PathBuf>) -> Result<()> {
    if let Some(log_path) = log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }
    Ok(())
}

fn demo_chart() -> Chart {
    let xs: Vec<f64> = (0..=60).map(|i| f64::from(i) / 10.0).collect();
    let wave = |f: fn(f64) -> f64| xs.iter().map(move |&x| (x, f(x)));

    Chart::new()
        .title("Sample series")
        .labels("x", "y")
        .series(Series::new(wave(f64::sin)).with_label("sin"))
        .series(Series::new(wave(f64::cos)).with_label("cos"))
        .series(Series::new(wave(|x| (x / 3.0) - 1.0)).with_label("linear"))
}

fn describe(outcome: &StepOutcome) -> String {
    match outcome {
        StepOutcome::Saved(path) => format!("saved {}", path.display()),
        StepOutcome::Copied => "copied".to_string(),
        StepOutcome::Skipped => "skipped".to_string(),
        StepOutcome::Failed(message) => format!("failed: {}", message),
    }
}
