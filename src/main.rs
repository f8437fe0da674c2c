use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tilepack::models::{AppConfig, Prefix, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
use tilepack::services::{AudioConverter, BatchConverter, ConvertedAsset, ImageConverter};

#[derive(Parser)]
#[command(name = "tilepack")]
#[command(about = "Convert PNG and WAV assets into C source tables")]
#[command(version)]
struct Cli {
    /// YAML config file (default: $TILEPACK_CONFIG, then ./tilepack.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PNG into palette, tiles and map sources
    Image {
        /// Input PNG file
        file: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Symbol prefix (default: sanitized file name)
        #[arg(short, long)]
        prefix: Option<String>,

        /// Tile width in pixels
        #[arg(long)]
        tile_width: Option<u32>,

        /// Tile height in pixels
        #[arg(long)]
        tile_height: Option<u32>,

        /// Maximum palette colors (1-16)
        #[arg(long)]
        colors: Option<usize>,
    },
    /// Convert a PCM WAV into an audio byte array
    Audio {
        /// Input WAV file
        file: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Symbol prefix (default: sanitized file name)
        #[arg(short, long)]
        prefix: Option<String>,
    },
    /// Convert every PNG and WAV in a directory and write assets.h
    Batch {
        /// Input directory
        dir: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip failing assets instead of aborting
        #[arg(long)]
        keep_going: bool,

        /// Also write manifest.json
        #[arg(long)]
        manifest: bool,

        /// Also write a starter main.c that includes the header
        #[arg(long)]
        main_c: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        run_status_command(cli.config.as_deref());
        return Ok(());
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tilepack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load(cli.config.as_deref());

    match command {
        Commands::Image {
            file,
            output,
            prefix,
            tile_width,
            tile_height,
            colors,
        } => {
            let mut image = config.image.clone();
            image.tile_width = tile_width.unwrap_or(image.tile_width);
            image.tile_height = tile_height.unwrap_or(image.tile_height);
            image.colors = colors.unwrap_or(image.colors);

            let converter = ImageConverter::from_config(&image)?;
            let prefix = resolve_prefix(prefix, &file)?;
            let out_dir = output.unwrap_or_else(|| config.output_dir.clone());
            let asset = converter
                .convert(&file, &out_dir, &prefix)
                .with_context(|| format!("Failed to convert {}", file.display()))?;
            print_asset(&asset);
        }
        Commands::Audio {
            file,
            output,
            prefix,
        } => {
            let converter = AudioConverter::from_config(&config.audio);
            let prefix = resolve_prefix(prefix, &file)?;
            let out_dir = output.unwrap_or_else(|| config.output_dir.clone());
            let asset = converter
                .convert(&file, &out_dir, &prefix)
                .with_context(|| format!("Failed to convert {}", file.display()))?;
            print_asset(&asset);
        }
        Commands::Batch {
            dir,
            output,
            keep_going,
            manifest,
            main_c,
        } => {
            let mut options = config.batch.clone();
            options.keep_going |= keep_going;
            options.manifest |= manifest;
            options.main_c |= main_c;

            let batch = BatchConverter::new(
                ImageConverter::from_config(&config.image)?,
                AudioConverter::from_config(&config.audio),
                options,
            );
            let out_dir = output.unwrap_or_else(|| config.output_dir.clone());
            let report = batch
                .run(&dir, &out_dir)
                .with_context(|| format!("Batch conversion of {} failed", dir.display()))?;

            for asset in &report.converted {
                print_asset(asset);
            }
            for failure in &report.failures {
                eprintln!("  ! {}: {}", failure.source.display(), failure.error);
            }
            println!("Wrote {}", report.header.display());
            if let Some(main) = &report.main {
                println!("Wrote {}", main.display());
            }
            if let Some(manifest) = &report.manifest {
                println!("Wrote {}", manifest.display());
            }
        }
    }

    Ok(())
}

/// Explicit prefix (validated) or the sanitized file stem.
fn resolve_prefix(explicit: Option<String>, file: &Path) -> anyhow::Result<Prefix> {
    match explicit {
        Some(name) => Ok(Prefix::new(name)?),
        None => {
            let stem = file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(Prefix::sanitize(&stem))
        }
    }
}

fn print_asset(asset: &ConvertedAsset) {
    println!("Converted {} ({})", asset.source.display(), asset.prefix);
    for f in &asset.files {
        println!("  + {}", f.display());
    }
}

/// Display version, effective configuration and commands
fn run_status_command(explicit: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let env_config = std::env::var(CONFIG_ENV_VAR).ok();

    println!("tilepack v{VERSION}");
    println!("PNG/WAV to C source converter for tile-based targets\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV_VAR} = {}",
        env_config.as_deref().unwrap_or("(not set)")
    );

    let source = match (explicit, &env_config) {
        (Some(p), _) => p.display().to_string(),
        (None, Some(p)) => p.clone(),
        (None, None) if Path::new(DEFAULT_CONFIG_FILE).is_file() => DEFAULT_CONFIG_FILE.to_string(),
        (None, None) => "defaults".to_string(),
    };
    let config = AppConfig::load(explicit);

    println!("\nConfiguration ({source}):");
    println!("  output_dir       = {}", config.output_dir.display());
    println!(
        "  image.tile       = {}x{}",
        config.image.tile_width, config.image.tile_height
    );
    println!("  image.colors     = {}", config.image.colors);
    println!("  audio.line_bytes = {}", config.audio.bytes_per_line);
    println!("  batch.header     = {}", config.batch.header_name);
    println!("  batch.keep_going = {}", config.batch.keep_going);
    println!("  batch.manifest   = {}", config.batch.manifest);
    println!("  batch.main_c     = {}", config.batch.main_c);

    println!("\nCommands:");
    println!("  tilepack image   Convert a PNG to palette, tiles and map");
    println!("  tilepack audio   Convert a WAV to an audio array");
    println!("  tilepack batch   Convert a directory and write assets.h");
    println!("\nRun 'tilepack --help' for more details.");
}
