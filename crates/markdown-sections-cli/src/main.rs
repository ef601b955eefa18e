use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use markdown_sections_config::Config;
use markdown_sections_engine::{ParseOptions, io, snapshot};
use relative_path::RelativePathBuf;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Indented tree of sections, fields and blocks
    Outline,
    /// The full content tree as JSON
    Json,
}

#[derive(Parser)]
#[command(name = "markdown-sections", version, about = "Parse marked-up markdown pages")]
struct Cli {
    /// Config file (defaults to ~/.config/markdown-sections/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Content root; overrides `content_root` from the config file
    #[arg(long)]
    root: Option<PathBuf>,

    /// Locale variant to read, e.g. `de` reads `about.de.md`
    #[arg(long)]
    locale: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Outline)]
    format: Format,

    /// Page path relative to the content root. Lists all pages when omitted.
    page: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from_path(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    log::debug!("config: {config:?}");

    let root = match (cli.root, &config) {
        (Some(root), _) => root,
        (None, Some(config)) => config.content_root.clone(),
        (None, None) => bail!(
            "no content root given; pass --root or create {}",
            config_path.display()
        ),
    };
    let locale = cli
        .locale
        .or_else(|| config.as_ref().and_then(|c| c.default_locale.clone()));
    let options = config
        .as_ref()
        .map(Config::parse_options)
        .unwrap_or_default();

    match cli.page {
        Some(page) => show_page(&page, locale.as_deref(), &root, &options, cli.format),
        None => list_pages(&root),
    }
}

fn show_page(
    page: &str,
    locale: Option<&str>,
    root: &std::path::Path,
    options: &ParseOptions,
    format: Format,
) -> Result<()> {
    let page = RelativePathBuf::from(page);
    let doc = io::load_document(&page, locale, root, options)
        .with_context(|| format!("loading page {page}"))?;
    match format {
        Format::Outline => print!("{}", snapshot::render_outline(&doc)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

fn list_pages(root: &std::path::Path) -> Result<()> {
    for path in io::scan_pages(root)? {
        let shown = path.strip_prefix(root).unwrap_or(&path);
        println!("{}", shown.display());
    }
    Ok(())
}
