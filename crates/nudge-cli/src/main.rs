use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nudge_core::{
    build_record, flatten_with, instantiate_template, load_record, parse_record,
    reconstruct, reconstruct_at, resolve_layer_styles, DirTemplateSource, Design, FlattenOptions,
    TemplateSource,
};
use nudge_schema::{FlatConfig, RecordMeta, SurfaceSettings};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Write output here instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flatten a design (`{layers, settings}`) into the legacy flat config
    Flatten {
        /// Design JSON, `-` for stdin
        #[arg(value_name = "DESIGN")]
        input: PathBuf,

        /// Leave out the nested `components` tree
        #[arg(long)]
        no_components: bool,
    },
    /// Rebuild a design from a flat config
    Reconstruct {
        /// Flat config JSON, `-` for stdin
        #[arg(value_name = "CONFIG")]
        input: PathBuf,

        /// Base for synthesized layer ids (default: current time in ms)
        #[arg(long)]
        id_base: Option<u64>,
    },
    /// Resolve renderer-ready styles for the layers of a design
    Resolve {
        /// Design JSON, `-` for stdin
        #[arg(value_name = "DESIGN")]
        input: PathBuf,

        /// Viewport width in pixels
        #[arg(long, default_value_t = 375.0)]
        width: f64,

        /// Animation id to preview instead of the on-enter animation
        #[arg(long)]
        preview: Option<String>,

        /// Only resolve this layer
        #[arg(long)]
        layer: Option<String>,
    },
    /// Wrap a design into a persisted record
    Pack {
        /// Design JSON, `-` for stdin
        #[arg(value_name = "DESIGN")]
        input: PathBuf,

        /// Record type, e.g. `bottom-sheet` or `modal`
        #[arg(long = "type", default_value = "bottom-sheet")]
        kind: String,

        #[arg(long, default_value = "draft")]
        status: String,

        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Load the design stored in a persisted record
    Load {
        /// Record JSON, `-` for stdin
        #[arg(value_name = "RECORD")]
        input: PathBuf,
    },
    /// Instantiate a template into a fresh design
    Template {
        /// Template name (looked up as `<dir>/<name>.json`) or a file path
        name: String,

        #[arg(long, default_value = "templates")]
        dir: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum LogFormat {
    Pretty,
    Json,
}

fn init_logging(level: LogLevel, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.to_string().parse()?)
        .from_env_lossy();

    // Logs go to stderr so stdout stays valid JSON.
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.log_format)?;

    match &cli.command {
        Command::Flatten {
            input,
            no_components,
        } => {
            let design: Design = read_json(input)?;
            let options = FlattenOptions {
                include_components: !no_components,
            };
            let config = flatten_with(&design, &options);
            info!(keys = config.len(), "flattened design");
            emit(&cli, &config)
        }
        Command::Reconstruct { input, id_base } => {
            let config: FlatConfig = read_json(input)?;
            let design = match id_base {
                Some(base) => reconstruct_at(&config, *base),
                None => reconstruct(&config),
            };
            info!(layers = design.layers.len(), "reconstructed design");
            emit(&cli, &design)
        }
        Command::Resolve {
            input,
            width,
            preview,
            layer,
        } => {
            let design: Design = read_json(input)?;
            let targets: Vec<_> = match layer {
                Some(id) => match design.layers.iter().find(|l| &l.id == id) {
                    Some(found) => vec![found],
                    None => bail!("Layer not found: {}", id),
                },
                None => design.layers.iter().collect(),
            };
            let resolved: Vec<_> = targets
                .into_iter()
                .map(|l| resolve_layer_styles(l, *width, preview.as_deref()))
                .collect();
            debug!(layers = resolved.len(), width, "resolved layer styles");
            emit(&cli, &resolved)
        }
        Command::Pack {
            input,
            kind,
            status,
            tags,
        } => {
            let design: Design = read_json(input)?;
            let meta = RecordMeta {
                kind: kind.clone(),
                status: status.clone(),
                tags: tags.clone(),
                ..Default::default()
            };
            emit(&cli, &build_record(&meta, &design))
        }
        Command::Load { input } => {
            let text = read_input(input)?;
            let record = parse_record(&text)
                .with_context(|| format!("Invalid record in {}", input.display()))?;
            let design = load_record(&record);
            info!(kind = %record.kind, layers = design.layers.len(), "loaded record");
            emit(&cli, &design)
        }
        Command::Template { name, dir } => {
            let source = DirTemplateSource::new(dir);
            let template = source.load_template(name)?;
            let layers = instantiate_template(&template);
            info!(layers = layers.len(), "instantiated template");
            emit(&cli, &Design::new(layers, SurfaceSettings::default()))
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_input(path)?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn emit<T: Serialize>(cli: &Cli, value: &T) -> Result<()> {
    let text = if cli.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match &cli.output {
        Some(path) => std::fs::write(path, text + "\n")
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}
