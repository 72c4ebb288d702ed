//! Gesture Segmenter - movement annotation from pose keypoint trajectories
//!
//! Turns recordings of 2D keypoint tracks into time-coded movement
//! annotations.

use std::path::{Path, PathBuf};

use gesture_segmenter::app::cli::{Cli, Commands, ConfigAction, OutputFormat};
use gesture_segmenter::app::config::Config;
use gesture_segmenter::export;
use gesture_segmenter::tracking::Recording;
use gesture_segmenter::workflow::GestureAnalyzer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    match cli.command {
        Commands::Analyze {
            input,
            output,
            format,
            threshold,
        } => run_analyze(&input, output, format, threshold, &config)?,
        Commands::Validate { input } => run_validate(&input)?,
        Commands::Info { input, detailed } => run_info(&input, detailed)?,
        Commands::Init { force } => run_init(force, &config)?,
        Commands::Config { action } => run_config(action, &config)?,
    }

    Ok(())
}

fn run_analyze(
    input: &Path,
    output: Option<PathBuf>,
    format: OutputFormat,
    threshold: Option<f64>,
    config: &Config,
) -> anyhow::Result<()> {
    info!("Analyzing recording {:?}", input);

    if !input.exists() {
        anyhow::bail!("Recording file not found: {:?}", input);
    }
    let recording = Recording::load(input)?;
    info!(
        "Loaded recording: {} tracks, {} frames at {} fps",
        recording.tracks.len(),
        recording.frame_count(),
        recording.fps
    );

    let mut options = config.analyzer_options();
    if let Some(t) = threshold {
        if !(0.0..=1.0).contains(&t) {
            anyhow::bail!("--threshold must be in [0, 1], got {}", t);
        }
        options.confidence_threshold = t;
    }

    let analyzer = GestureAnalyzer::with_options(options);
    let report = analyzer.analyze(&recording)?;

    if report.segments.is_empty() {
        warn!("No movement detected");
    }

    let output_path = output.unwrap_or_else(|| default_output_path(input, format));
    let content = match format {
        OutputFormat::Csv => export::to_csv(&report.annotations),
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
    };
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output_path, content)?;
    info!("Wrote annotations to {:?}", output_path);

    // Print summary
    println!("\nAnalysis Complete");
    println!("  Run id: {}", report.id);
    println!(
        "  Frames: {} ({:.1}s at {} fps)",
        report.frame_count,
        report.frame_count as f64 / report.fps,
        report.fps
    );
    println!(
        "  Movement segments: {} ({:.2}s total)",
        report.segments.len(),
        report.movement_secs()
    );
    println!(
        "  Submovements: {} left, {} right",
        report.submovements.left_count(),
        report.submovements.right_count()
    );
    println!(
        "  Holds: {} ({:.2}s total, {:.1} frames avg)",
        report.holds.stats.count,
        report.holds.stats.total_secs,
        report.holds.stats.mean_frames
    );
    println!("  Output: {:?}", output_path);

    Ok(())
}

/// Derive a timestamped output path next to the input file.
fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "recording".to_string());
    let ext = match format {
        OutputFormat::Csv => "csv",
        OutputFormat::Json => "json",
    };
    let name = chrono::Local::now()
        .format(&format!("{stem}_annotations_%Y%m%d_%H%M%S.{ext}"))
        .to_string();
    input.with_file_name(name)
}

fn run_validate(input: &Path) -> anyhow::Result<()> {
    info!("Validating {:?}", input);

    if !input.exists() {
        anyhow::bail!("Recording file not found: {:?}", input);
    }

    match Recording::load(input) {
        Ok(recording) => {
            println!("Validation PASSED");
            println!("  Tracks: {}", recording.tracks.len());
            println!("  Frames: {}", recording.frame_count());
            Ok(())
        }
        Err(e) => {
            println!("Validation FAILED: {}", e);
            anyhow::bail!("Recording is invalid")
        }
    }
}

fn run_info(input: &Path, detailed: bool) -> anyhow::Result<()> {
    if !input.exists() {
        anyhow::bail!("Recording file not found: {:?}", input);
    }
    let recording = Recording::load(input)?;

    println!("Recording {:?}:", input);
    println!("  Frame rate: {} fps", recording.fps);
    println!(
        "  Frames: {} ({:.1}s)",
        recording.frame_count(),
        recording.frame_count() as f64 / recording.fps
    );
    println!("  Tracks: {}", recording.tracks.len());

    if detailed {
        for (name, track) in &recording.tracks {
            println!(
                "    {}  (mean confidence {:.3})",
                name,
                track.mean_confidence()
            );
        }
    }

    Ok(())
}

fn run_init(force: bool, config: &Config) -> anyhow::Result<()> {
    let config_path = Config::default_path();

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {:?}. Use --force to overwrite.",
            config_path
        );
    }

    config.save_default()?;
    println!("Created config at {:?}", config_path);
    println!("\nConfig content:\n{}", config.to_toml()?);

    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("Configuration ({:?}):\n", Config::default_path());
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Get { key } => {
            let value = toml::from_str::<toml::Value>(&config.to_toml()?)
                .ok()
                .and_then(|root| lookup(&root, &key).cloned());
            match value {
                Some(v) => println!("{} = {}", key, v),
                None => anyhow::bail!("Configuration key '{}' not found", key),
            }
        }
        ConfigAction::Set { key, value } => {
            let config_path = Config::default_path();
            if !config_path.exists() {
                anyhow::bail!("No config file found. Run 'gesture-seg init' first.");
            }

            let content = std::fs::read_to_string(&config_path)?;
            let mut root: toml::Value = toml::from_str(&content)?;
            if !assign(&mut root, &key, &value) {
                anyhow::bail!("Failed to set '{}'. Key may not exist in config.", key);
            }

            // Re-validate before persisting the edit.
            let updated: Config = root.try_into().map_err(|e| anyhow::anyhow!("{e}"))?;
            updated.validate()?;
            updated.save(&config_path)?;
            println!("Set {} = {}", key, value);
        }
        ConfigAction::Reset { force } => {
            let config_path = Config::default_path();

            if config_path.exists() && !force {
                println!("Config exists at {:?}", config_path);
                println!("Use --force to reset to defaults");
                return Ok(());
            }

            Config::default().save_default()?;
            println!("Configuration reset to defaults at {:?}", config_path);
        }
    }

    Ok(())
}

/// Walk a dotted key through nested TOML tables.
fn lookup<'a>(root: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    let mut current = root;
    for part in key.split('.') {
        current = current.as_table()?.get(part)?;
    }
    Some(current)
}

/// Assign a dotted key in nested TOML tables. Only existing keys can be set.
fn assign(root: &mut toml::Value, key: &str, raw: &str) -> bool {
    let mut parts = key.split('.').peekable();
    let mut current = root;
    while let Some(part) = parts.next() {
        let Some(table) = current.as_table_mut() else {
            return false;
        };
        let Some(next) = table.get_mut(part) else {
            return false;
        };
        if parts.peek().is_none() {
            *next = parse_toml_value(raw);
            return true;
        }
        current = next;
    }
    false
}

/// Interpret a raw CLI value as the narrowest matching TOML type.
fn parse_toml_value(raw: &str) -> toml::Value {
    if let Ok(v) = raw.parse::<i64>() {
        return toml::Value::Integer(v);
    }
    if let Ok(v) = raw.parse::<f64>() {
        return toml::Value::Float(v);
    }
    if let Ok(v) = raw.parse::<bool>() {
        return toml::Value::Boolean(v);
    }
    toml::Value::String(raw.to_string())
}
