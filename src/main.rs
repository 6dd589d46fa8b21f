use clap::Parser;
use mediatag::application::{InitService, PageRenderer};
use mediatag::cli::{format_page, format_rejections, Cli, Commands, SiteArgs};
use mediatag::error::{MediaTagError, Result};
use mediatag::infrastructure::{Config, PageDocument, CONFIG_FILE};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// RUST_LOG wins when set; otherwise `--debug` shows debug events, default is warn
fn init_tracing(debug: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) if debug => "debug".to_string(),
        Err(_) => "warn".to_string(),
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path, origin } => {
            // Write default mediatag.toml
            InitService::execute(&path, origin.as_deref())?;
            Ok(())
        }
        Commands::Render { files, site, head } => {
            let config = load_config(&site)?;
            let items = read_items(&files)?;
            // Every input is one content item of the same page
            let texts: Vec<&str> = items.iter().map(|(_, text)| text.as_str()).collect();

            let renderer = PageRenderer::new(config.replacer());
            let mut document = PageDocument::new();
            let outputs =
                renderer.render_page(&config, Some(&mut document), &texts, &config.origin);

            // Head assets were collected once across all items
            let rendered: Vec<String> = outputs.into_iter().map(|o| o.text).collect();
            let head_html = document.head_html();
            let head = if head { Some(head_html.as_str()) } else { None };
            print!("{}", format_page(head, &rendered));
            Ok(())
        }
        Commands::Check { files, site } => {
            let config = load_config(&site)?;
            let items = read_items(&files)?;
            let replacer = config.replacer();

            // Label each rejection with the item it came from
            let mut rejections = Vec::new();
            for (source, text) in &items {
                let output = replacer.process(text, &config.origin);
                rejections.extend(output.rejections.into_iter().map(|r| (source.clone(), r)));
            }

            println!("{}", format_rejections(&rejections).trim_end());
            if rejections.is_empty() {
                Ok(())
            } else {
                Err(MediaTagError::Rejected(rejections.len()))
            }
        }
    }
}

/// Config from `--config`, else `./mediatag.toml`, else defaults; flags win
fn load_config(site: &SiteArgs) -> Result<Config> {
    let mut config = match &site.config {
        Some(path) => load_and_resolve(path)?,
        None => {
            let default_path = PathBuf::from(CONFIG_FILE);
            if default_path.exists() {
                load_and_resolve(&default_path)?
            } else {
                Config::default()
            }
        }
    };

    if let Some(origin) = &site.origin {
        config.origin = origin.clone();
    }
    if let Some(site_root) = &site.site_root {
        config.site_root = site_root.clone();
    }

    config.validate()?;
    Ok(config)
}

fn load_and_resolve(path: &Path) -> Result<Config> {
    let mut config = Config::load_from_file(path)?;
    if let Some(dir) = path.parent() {
        config.resolve_site_root(dir);
    }
    Ok(config)
}

/// Read content items as `(label, text)`, stdin when no files are given
fn read_items(files: &[PathBuf]) -> Result<Vec<(String, String)>> {
    if files.is_empty() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(vec![("<stdin>".to_string(), text)]);
    }

    files
        .iter()
        .map(|path| Ok((path.display().to_string(), fs::read_to_string(path)?)))
        .collect()
}
