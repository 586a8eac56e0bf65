mod app;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;

use mindmap_lens::highlight::MemoryPanel;
use mindmap_lens::net::load_source;
use mindmap_lens::{AlignConfig, AlignError, SourceAligner};

use app::panel::ViewerPanel;
use app::LensApp;

/// Highlight the passages of a web page that an outline node was written from.
#[derive(Parser, Debug)]
#[command(name = "mindmap-lens", version, about)]
struct Cli {
    /// Source page: http(s) URL or local HTML file
    #[arg(long)]
    source: String,

    /// Serialized outline (markdown headings)
    #[arg(long)]
    outline: PathBuf,

    /// CSS selector scoping the source panel inside the page
    #[arg(long)]
    panel: Option<String>,

    /// JSON file overriding alignment tuning constants
    #[arg(long, env = "MINDMAP_LENS_TUNING")]
    tuning: Option<PathBuf>,

    /// Align a single node and print the result instead of opening the viewer
    #[arg(long)]
    node: Option<String>,

    /// Outline level of `--node`
    #[arg(long, default_value_t = 1)]
    level: u32,

    /// Delay before the primary match is scrolled into view
    #[arg(long, default_value_t = 100)]
    scroll_delay_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.tuning {
        Some(path) => AlignConfig::from_json_file(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => AlignConfig::default(),
    };
    let outline = std::fs::read_to_string(&cli.outline)
        .with_context(|| format!("reading outline {}", cli.outline.display()))?;
    let document = load_source(&cli.source, cli.panel.as_deref())
        .with_context(|| format!("loading source {}", cli.source))?;
    log::info!(
        "Loaded {} source elements from {}",
        document.len(),
        document.url
    );

    let delay = Duration::from_millis(cli.scroll_delay_ms);

    if let Some(node) = cli.node.as_deref() {
        return run_headless(outline, MemoryPanel::new(document), config, delay, node, cli.level);
    }

    let aligner = SourceAligner::new(outline, ViewerPanel::new(document))
        .with_config(config)
        .with_scroll_delay(delay);
    run_viewer(aligner)
}

fn run_headless(
    outline: String,
    panel: MemoryPanel,
    config: AlignConfig,
    delay: Duration,
    node: &str,
    level: u32,
) -> Result<()> {
    let mut aligner = SourceAligner::new(outline, panel)
        .with_config(config)
        .with_scroll_delay(delay);

    let report = match aligner.highlight_source_paragraph(node, level) {
        Ok(report) => report,
        Err(AlignError::NoMatchFound { .. }) => {
            println!("no match for \"{}\"", ui::truncate_str(node, 60));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "{} tier: {} match(es), {} decorated",
        report.tier,
        report.matches.len(),
        report.count()
    );
    let document = aligner.panel().document();
    for m in &report.matches {
        let text = document
            .get(m.element)
            .map(|e| ui::truncate_str(&e.text, 70))
            .unwrap_or_default();
        let marker = if m.element == report.primary { '*' } else { ' ' };
        println!(
            "{} {:>5} {:<9} {:>7.2}  {}",
            marker,
            m.element.to_string(),
            m.role.label(),
            m.score,
            text
        );
    }
    if report.faults > 0 {
        log::warn!("{} element(s) could not be decorated", report.faults);
    }
    Ok(())
}

fn run_viewer(aligner: SourceAligner<String, ViewerPanel>) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "mindmap lens",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(cjk_fonts());
            Ok(Box::new(LensApp::new(aligner)))
        }),
    )
    .map_err(|e| anyhow!("viewer failed: {}", e))
}

/// Default fonts plus the first CJK system font found, as fallback.
fn cjk_fonts() -> egui::FontDefinitions {
    let mut fonts = egui::FontDefinitions::default();
    let font_paths = [
        "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
        "/System/Library/Fonts/HiraginoSans-W3.otf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    ];
    for path in &font_paths {
        let Ok(data) = std::fs::read(path) else {
            continue;
        };
        log::debug!("Using CJK fallback font {}", path);
        fonts
            .font_data
            .insert("cjk".to_owned(), egui::FontData::from_owned(data));
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            if let Some(list) = fonts.families.get_mut(&family) {
                list.push("cjk".to_owned());
            }
        }
        break;
    }
    fonts
}
