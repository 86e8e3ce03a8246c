use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};
use keycase::cli::output::{self, OutputFormat};
use keycase::parser::{self, FileType};
use keycase::{Config, Style, Transformer};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "keycase")]
#[command(version, about = "Rename JSON object keys between naming conventions", long_about = None)]
struct Cli {
    /// Files to transform (reads JSON from stdin when none are given)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Target style: camel, snake, kebab or pascal
    #[arg(short, long, value_parser = parse_style)]
    style: Option<Style>,

    /// Output format (pretty, compact)
    #[arg(short, long, default_value = "pretty")]
    format: OutputFormat,

    /// Rewrite files in place
    #[arg(short, long, conflicts_with = "check")]
    in_place: bool,

    /// Report files whose keys are not in the target style, write nothing
    #[arg(long)]
    check: bool,

    /// Config file, applied on top of global and local config
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

fn parse_style(s: &str) -> Result<Style, String> {
    s.parse::<Style>().map_err(|e| e.to_string())
}

struct Outcome {
    rendered: String,
    keys_changed: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "keycase", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.style, cli.config.clone())?;
    let transformer = Transformer::new(config);
    let colored = !cli.no_color;
    let style = transformer.config().style.to_string();

    if cli.files.is_empty() {
        if cli.in_place {
            anyhow::bail!("--in-place needs at least one file");
        }
        return run_stdin(&cli, &transformer, colored, &style);
    }

    let mut needs_rename = 0;
    let mut rewritten = 0;
    let mut failed = 0;
    let mut stdout = io::stdout().lock();

    for file_path in &cli.files {
        if !file_path.exists() {
            output::print_file_error(file_path, "file not found", colored);
            failed += 1;
            continue;
        }

        let (content, outcome) = match load_file(&transformer, file_path, cli.format) {
            Ok(loaded) => loaded,
            Err(e) => {
                output::print_file_error(file_path, &format!("{:#}", e), colored);
                failed += 1;
                continue;
            }
        };

        if cli.check {
            if outcome.keys_changed {
                needs_rename += 1;
                output::print_needs_rename(file_path, &style, colored);
            }
        } else if cli.in_place {
            if outcome.rendered != content {
                if let Err(e) = fs::write(file_path, &outcome.rendered) {
                    output::print_file_error(file_path, &format!("Failed to write file: {}", e), colored);
                    failed += 1;
                    continue;
                }
                tracing::info!(path = %file_path.display(), "rewrote file");
                rewritten += 1;
            }
        } else {
            stdout.write_all(outcome.rendered.as_bytes())?;
        }
    }
    stdout.flush()?;

    // Print summary
    if cli.check {
        output::print_check_summary(needs_rename, &cli.files, colored);
    } else if cli.in_place {
        output::print_write_summary(rewritten, &cli.files, colored);
    }
    if failed > 0 {
        output::print_failure_summary(failed, &cli.files, colored);
    }

    // Exit with appropriate code
    if failed > 0 || (cli.check && needs_rename > 0) {
        std::process::exit(1);
    }

    Ok(())
}

fn load_file(
    transformer: &Transformer,
    file_path: &Path,
    format: OutputFormat,
) -> Result<(String, Outcome)> {
    let content = fs::read_to_string(file_path).context("Failed to read file")?;
    let outcome = transform_content(transformer, &content, FileType::from_path(file_path), format)
        .context("Failed to transform file")?;
    Ok((content, outcome))
}

fn run_stdin(cli: &Cli, transformer: &Transformer, colored: bool, style: &str) -> Result<()> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read stdin")?;

    let outcome = transform_content(transformer, &content, FileType::Json, cli.format)?;

    if cli.check {
        let source = [PathBuf::from("<stdin>")];
        if outcome.keys_changed {
            output::print_needs_rename(&source[0], style, colored);
        }
        output::print_check_summary(usize::from(outcome.keys_changed), &source, colored);
        if outcome.keys_changed {
            std::process::exit(1);
        }
        return Ok(());
    }

    io::stdout().write_all(outcome.rendered.as_bytes())?;
    Ok(())
}

fn transform_content(
    transformer: &Transformer,
    content: &str,
    file_type: FileType,
    format: OutputFormat,
) -> Result<Outcome> {
    let documents = parser::parse_documents(content, file_type)?;
    let style = transformer.config().style;

    let transformed = documents
        .iter()
        .map(|document| transformer.transform(document, style))
        .collect::<keycase::Result<Vec<_>>>()?;

    let keys_changed = transformed != documents;
    let rendered = parser::render_documents(
        &transformed,
        file_type,
        format,
        transformer.config().indent,
    )?;

    Ok(Outcome {
        rendered,
        keys_changed,
    })
}

fn init_tracing(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
