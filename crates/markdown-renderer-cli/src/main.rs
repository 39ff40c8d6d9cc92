use anyhow::{Context, Result, bail};
use clap::Parser;
use markdown_renderer_config::Config;
use markdown_renderer_engine::{io, parse_document, render_document};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "markdown-renderer")]
#[command(about = "Render Markdown documents to HTML")]
struct Cli {
    /// Input files or directories (directories are scanned for *.md).
    /// Falls back to the configured inputs, then to stdin.
    inputs: Vec<PathBuf>,

    /// Write <stem>.html per input into this directory instead of stdout
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print the parsed document outline instead of HTML
    #[arg(long)]
    tree: bool,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

/// Where documents come from.
#[derive(Debug, PartialEq, Eq)]
enum Source {
    Stdin,
    Files(Vec<PathBuf>),
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    if cli.init_config {
        let written = init_config(cli.config.as_deref())?;
        log::info!("Wrote default config to {}", written.display());
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;

    let output_dir = cli.output_dir.clone().or_else(|| config.output_dir.clone());
    let source = resolve_source(&cli.inputs, &config)?;

    match source {
        Source::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read document from stdin")?;
            print_output(&render(&text, cli.tree))
        }
        Source::Files(files) => {
            for file in &files {
                let text = io::read_document(file)?;
                let rendered = render(&text, cli.tree);
                match &output_dir {
                    Some(dir) => {
                        let target = output_path(dir, file, cli.tree);
                        io::write_output(&target, &rendered)?;
                        log::info!("{} -> {}", file.display(), target.display());
                    }
                    None => print_output(&rendered)?,
                }
            }
            Ok(())
        }
    }
}

/// Loads the config from `path`, or from the default location.
///
/// A missing file is the default config.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    let config_path = path.map_or_else(Config::config_path, Path::to_path_buf);
    log::debug!("Config path: {}", config_path.display());
    let config = loaded
        .with_context(|| format!("Failed to load config file {}", config_path.display()))?;
    Ok(config.unwrap_or_default())
}

/// Saves a default config to `path`, or to the default location.
fn init_config(path: Option<&Path>) -> Result<PathBuf> {
    let config = Config::default();
    match path {
        Some(path) => {
            config.save_to_path(path)?;
            Ok(path.to_path_buf())
        }
        None => {
            config.save()?;
            Ok(Config::config_path())
        }
    }
}

/// Picks the documents to render: explicit paths, then configured globs,
/// then stdin.
fn resolve_source(inputs: &[PathBuf], config: &Config) -> Result<Source> {
    if !inputs.is_empty() {
        return collect_inputs(inputs).map(Source::Files);
    }
    if config.inputs.is_empty() {
        return Ok(Source::Stdin);
    }
    let files = config
        .resolve_inputs()
        .context("Failed to resolve configured inputs")?;
    if files.is_empty() {
        bail!("No documents matched the configured inputs");
    }
    Ok(Source::Files(files))
}

/// Expands directories into the markdown files beneath them.
fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let found = io::scan_markdown_files(input)
                .with_context(|| format!("Failed to scan {}", input.display()))?;
            log::debug!("found {} documents in {}", found.len(), input.display());
            files.extend(found);
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}

fn render(text: &str, tree: bool) -> String {
    let doc = parse_document(text);
    if tree {
        doc.outline()
    } else {
        render_document(&doc)
    }
}

/// `<dir>/<stem>.html`, or `<stem>.txt` for outlines.
fn output_path(dir: &Path, input: &Path, tree: bool) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let extension = if tree { "txt" } else { "html" };
    dir.join(format!("{}.{extension}", stem.to_string_lossy()))
}

fn print_output(rendered: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").context("Failed to write to stdout")
}
