use clap::Parser;
use epii_render::{
    Document, EpiiError, FileLoader, FileLoaderOptions, LoaderPipeline, get_inject_copy,
    render_to_string,
};
use log::info;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Assemble an HTML page from a JSON page description.
#[derive(Parser, Debug)]
#[command(name = "epii-render", version, about)]
struct Cli {
    /// Path to the page description (JSON).
    page: PathBuf,

    /// Directory inline assets are read from. Without it no files are read.
    #[arg(long)]
    source: Option<PathBuf>,

    /// URL prefix for referenced assets.
    #[arg(long, default_value = "/")]
    prefix: String,

    /// JSON file published to the client as `window.epii.state`.
    #[arg(long)]
    state: Option<PathBuf>,

    /// Write the result here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the resolved document model as JSON instead of HTML.
    #[arg(long)]
    dump_model: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), EpiiError> {
    env_logger::init();
    let cli = Cli::parse();

    info!("Loading page from {}", cli.page.display());
    let mut document = Document::from_json_str(&fs::read_to_string(&cli.page)?)?;
    if document.name.is_empty() {
        document.name = cli
            .page
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
    }

    let mut builder = LoaderPipeline::builder();
    if let Some(source) = &cli.source {
        if !source.is_dir() {
            return Err(EpiiError::Config(format!(
                "source '{}' is not a directory",
                source.display()
            )));
        }
        let options = FileLoaderOptions::new(source).with_prefix(cli.prefix.as_str());
        builder = builder.with_loader(FileLoader::new(options)?);
    }
    let report = builder.build().apply(&mut document).await;
    info!(
        "Resolved {} of {} assets ({} unmatched)",
        report.processed,
        report.total(),
        report.unmatched
    );

    if let Some(state_path) = &cli.state {
        let state: Value = serde_json::from_str(&fs::read_to_string(state_path)?)?;
        document = get_inject_copy(&document, Some(&state));
    }

    let output = if cli.dump_model {
        serde_json::to_string_pretty(&document)?
    } else {
        render_to_string(&document)
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, output)?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", output),
    }
    Ok(())
}
