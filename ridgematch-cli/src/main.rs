use clap::Parser;
use ridgematch::io::{load_binary_grid, save_binary_grid, DEFAULT_THRESHOLD};
use ridgematch::{
    extract_with, thin, Alignment, Direction, ExtractConfig, MatchConfig, Matcher, Minutia,
    MinutiaKind,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "RidgeMatch CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ExtractConfigJson {
    orientation_distance: usize,
}

impl Default for ExtractConfigJson {
    fn default() -> Self {
        Self {
            orientation_distance: ExtractConfig::default().orientation_distance,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct MatchConfigJson {
    distance_threshold: u32,
    orientation_threshold: u32,
    found_threshold: usize,
    angle_offset: u32,
    bidirectional: bool,
    parallel: bool,
}

impl Default for MatchConfigJson {
    fn default() -> Self {
        let cfg = MatchConfig::default();
        Self {
            distance_threshold: cfg.distance_threshold,
            orientation_threshold: cfg.orientation_threshold,
            found_threshold: cfg.found_threshold,
            angle_offset: cfg.angle_offset,
            bidirectional: cfg.bidirectional,
            parallel: cfg.parallel,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    left_path: String,
    right_path: String,
    threshold: u8,
    output_path: Option<String>,
    skeleton_dir: Option<String>,
    include_minutiae: bool,
    extract: ExtractConfigJson,
    #[serde(rename = "match")]
    match_cfg: MatchConfigJson,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            left_path: String::new(),
            right_path: String::new(),
            threshold: DEFAULT_THRESHOLD,
            output_path: None,
            skeleton_dir: None,
            include_minutiae: false,
            extract: ExtractConfigJson::default(),
            match_cfg: MatchConfigJson::default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct MinutiaRecord {
    row: i32,
    col: i32,
    orientation: i32,
    kind: &'static str,
}

impl From<&Minutia> for MinutiaRecord {
    fn from(value: &Minutia) -> Self {
        Self {
            row: value.row,
            col: value.col,
            orientation: value.orientation,
            kind: match value.kind {
                MinutiaKind::Ending => "ending",
                MinutiaKind::Bifurcation => "bifurcation",
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct AlignmentRecord {
    pivot: MinutiaRecord,
    paired: MinutiaRecord,
    row_delta: i32,
    col_delta: i32,
    rotation_deg: i32,
    overlap: usize,
    reference: &'static str,
}

impl From<Alignment> for AlignmentRecord {
    fn from(value: Alignment) -> Self {
        Self {
            pivot: MinutiaRecord::from(&value.pivot),
            paired: MinutiaRecord::from(&value.paired),
            row_delta: value.row_delta,
            col_delta: value.col_delta,
            rotation_deg: value.rotation_deg,
            overlap: value.overlap,
            reference: match value.direction {
                Direction::Forward => "left",
                Direction::Reverse => "right",
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct ImpressionRecord {
    path: String,
    rows: usize,
    cols: usize,
    minutiae_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    minutiae: Option<Vec<MinutiaRecord>>,
}

#[derive(Debug, Serialize)]
struct Output {
    matched: bool,
    alignment: Option<AlignmentRecord>,
    left: ImpressionRecord,
    right: ImpressionRecord,
}

fn process(
    path: &str,
    config: &Config,
    cfg: &ExtractConfig,
) -> Result<(Vec<Minutia>, ImpressionRecord), Box<dyn std::error::Error>> {
    let grid = load_binary_grid(path, config.threshold)?;
    let skeleton = thin(&grid);
    if let Some(dir) = &config.skeleton_dir {
        let stem = Path::new(path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("impression");
        save_binary_grid(&skeleton, Path::new(dir).join(format!("{stem}_skeleton.png")))?;
    }
    let minutiae = extract_with(&skeleton, cfg);
    let record = ImpressionRecord {
        path: path.to_string(),
        rows: grid.rows(),
        cols: grid.cols(),
        minutiae_count: minutiae.len(),
        minutiae: config
            .include_minutiae
            .then(|| minutiae.iter().map(MinutiaRecord::from).collect()),
    };
    Ok((minutiae, record))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("ridgematch=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.left_path.is_empty() || config.right_path.is_empty() {
        return Err("left_path and right_path must be set in the config".into());
    }

    let matcher = Matcher::new(MatchConfig {
        distance_threshold: config.match_cfg.distance_threshold,
        orientation_threshold: config.match_cfg.orientation_threshold,
        found_threshold: config.match_cfg.found_threshold,
        angle_offset: config.match_cfg.angle_offset,
        bidirectional: config.match_cfg.bidirectional,
        parallel: config.match_cfg.parallel,
    })?;
    let extract_cfg = ExtractConfig {
        orientation_distance: config.extract.orientation_distance,
    };

    if let Some(dir) = &config.skeleton_dir {
        fs::create_dir_all(dir)?;
    }
    let (left, left_record) = process(&config.left_path, &config, &extract_cfg)?;
    let (right, right_record) = process(&config.right_path, &config, &extract_cfg)?;

    let alignment = matcher.find_alignment(&left, &right);
    let output = Output {
        matched: alignment.is_some(),
        alignment: alignment.map(AlignmentRecord::from),
        left: left_record,
        right: right_record,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
