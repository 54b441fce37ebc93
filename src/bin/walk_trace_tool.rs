use chart_walk::SeriesStyleConfig;
use chart_walk::core::{LinePoint, VisibleRange};
use chart_walk::render::{DrawCommand, RecordingSurface};
use chart_walk::series::{AreaSeriesData, AreaSeriesRenderer, LineSeriesData, LineSeriesRenderer};
use chart_walk::walk::WalkReport;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: walk_trace_tool --input <scene.json> [--output <trace.json>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SeriesKind {
    Line,
    Area,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SceneFile {
    scenes: Vec<Scene>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Scene {
    id: String,
    kind: SeriesKind,
    points: Vec<LinePoint>,
    #[serde(default)]
    visible_range: Option<VisibleRange>,
    #[serde(default)]
    threshold: Option<f64>,
    #[serde(default)]
    bottom: f64,
    #[serde(default)]
    style: SeriesStyleConfig,
}

#[derive(Debug, Clone, Serialize)]
struct TraceFile {
    traces: Vec<SceneTrace>,
}

#[derive(Debug, Clone, Serialize)]
struct SceneTrace {
    id: String,
    crossings: Vec<LinePoint>,
    segments: usize,
    fills: usize,
    commands: Vec<DrawCommand>,
}

fn main() {
    let _ = chart_walk::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let scenes: SceneFile =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let traces = scenes
        .scenes
        .into_iter()
        .map(trace_scene)
        .collect::<Result<Vec<_>, _>>()?;
    let payload = serde_json::to_string_pretty(&TraceFile { traces })
        .map_err(|err| format!("failed to serialize json: {err}"))?;

    match args.output {
        Some(path) => fs::write(&path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{payload}");
            Ok(())
        }
    }
}

fn trace_scene(scene: Scene) -> Result<SceneTrace, String> {
    let fail = |err: chart_walk::ChartError| format!("scene `{}`: {err}", scene.id);
    scene.style.validate().map_err(fail)?;
    let style = scene.style.to_series_style().map_err(fail)?;
    let visible_range = scene
        .visible_range
        .or(Some(VisibleRange::full(scene.points.len())));

    let mut surface = RecordingSurface::new();
    let report: WalkReport = match scene.kind {
        SeriesKind::Line => {
            let mut renderer = LineSeriesRenderer::new();
            renderer.set_data(LineSeriesData {
                items: scene.points.clone(),
                visible_range,
                line: scene.style.line_style(),
                style,
                threshold: scene.threshold,
                bar_width: scene.style.bar_width,
            });
            renderer.draw(&mut surface).map_err(fail)?
        }
        SeriesKind::Area => {
            let mut renderer = AreaSeriesRenderer::new();
            renderer.set_data(AreaSeriesData {
                items: scene.points.clone(),
                visible_range,
                line: scene.style.line_style(),
                style,
                threshold: scene.threshold,
                fill: scene.style.area_fill().map_err(fail)?,
                bottom: scene.bottom,
                bar_width: scene.style.bar_width,
            });
            renderer.draw(&mut surface).map_err(fail)?
        }
    };

    Ok(SceneTrace {
        id: scene.id.clone(),
        crossings: report.crossings.to_vec(),
        segments: report.segments.len(),
        fills: report.fill_count(),
        commands: surface.into_commands(),
    })
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| format!("missing --input\n{USAGE}"))?;
    Ok(CliArgs { input, output })
}
