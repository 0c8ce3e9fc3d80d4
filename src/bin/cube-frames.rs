use std::{
    fs,
    io::{self, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use cube_page_view::{
    Axis, CubePageView, CubeViewOptions, PageController, Size, SnapshotCompositor, TransformStyle,
    render_frame,
};

/// Simulate a swipe through a cube page view and print one JSON frame
/// snapshot per step.
#[derive(Parser, Debug)]
#[command(name = "cube-frames", version)]
struct Cli {
    /// Options JSON file; flags below override its fields.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Scroll direction.
    #[arg(long, value_enum)]
    axis: Option<AxisChoice>,

    /// Fold style.
    #[arg(long, value_enum)]
    style: Option<StyleChoice>,

    /// Page the swipe starts from.
    #[arg(long)]
    start_page: Option<usize>,

    /// Number of pages in the view.
    #[arg(long, default_value_t = 3)]
    pages: usize,

    /// Final position of the swipe (defaults to the last page).
    #[arg(long)]
    to: Option<f64>,

    /// Position increment between frames.
    #[arg(long, default_value_t = 0.25)]
    step: f64,

    /// Viewport width.
    #[arg(long, default_value_t = 360.0)]
    width: f64,

    /// Viewport height.
    #[arg(long, default_value_t = 640.0)]
    height: f64,

    /// Log lifecycle events to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AxisChoice {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleChoice {
    Inside,
    Outside,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(io::stderr)
        .init();

    let options = resolve_options(&cli)?;
    if cli.pages == 0 {
        anyhow::bail!("--pages must be at least 1");
    }
    if !(cli.step.is_finite() && cli.step > 0.0) {
        anyhow::bail!("--step must be a positive number");
    }
    if !(cli.width > 0.0 && cli.height > 0.0) {
        anyhow::bail!("viewport size must be positive");
    }

    let controller = PageController::new(options.start_page);
    let mut view: CubePageView<usize> = CubePageView::builder()
        .item_count(cli.pages)
        .item_builder(|_, index, _| index)
        .controller(controller.clone())
        .options(options)
        .build()?;
    view.after_first_frame();
    view.attach_surface()?;

    let viewport = Size::new(cli.width, cli.height);
    let from = view.current_position();
    let last = (cli.pages - 1) as f64;
    let to = cli.to.unwrap_or(last);
    if !to.is_finite() {
        anyhow::bail!("--to must be a finite position");
    }
    let to = to.clamp(0.0, last);
    let direction = if to >= from { 1.0 } else { -1.0 };
    let steps = ((to - from).abs() / cli.step).floor() as usize;

    let mut backend = SnapshotCompositor::new();
    for i in 0..=steps {
        controller.set_page(from + direction * cli.step * i as f64);
        render_frame(&view, viewport, &mut backend)?;
    }
    if view.current_position() != to {
        controller.set_page(to);
        render_frame(&view, viewport, &mut backend)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for frame in backend.frames() {
        writeln!(out, "{}", frame.to_json_string()?).context("write frame snapshot")?;
    }

    view.dispose();
    controller.dispose();
    Ok(())
}

fn resolve_options(cli: &Cli) -> anyhow::Result<CubeViewOptions> {
    let mut options = match &cli.options {
        Some(path) => {
            let s = fs::read_to_string(path)
                .with_context(|| format!("read options '{}'", path.display()))?;
            CubeViewOptions::from_json_str(&s)?
        }
        None => CubeViewOptions::default(),
    };

    if let Some(axis) = cli.axis {
        options.scroll_direction = match axis {
            AxisChoice::Horizontal => Axis::Horizontal,
            AxisChoice::Vertical => Axis::Vertical,
        };
    }
    if let Some(style) = cli.style {
        options.transform_style = match style {
            StyleChoice::Inside => TransformStyle::Inside,
            StyleChoice::Outside => TransformStyle::Outside,
        };
    }
    if let Some(page) = cli.start_page {
        options.start_page = page;
    }
    Ok(options)
}
