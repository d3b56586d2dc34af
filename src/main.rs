use std::path::Path;

use anyhow::{Result, bail};
use tracing::info;

use trailhound::{
    browsers,
    cli::{self, CliOptions, DataKind},
    fetch,
    format::OutputFormat,
    logging,
};

fn main() -> Result<()> {
    logging::init_logging();

    let opts = cli::parse();
    let format = resolve_format(&opts)?;

    let rendered = match opts.kind {
        DataKind::History => {
            let collection = if opts.browser.eq_ignore_ascii_case("all") {
                fetch::fetch_all_history()
            } else {
                fetch::fetch_history(selected_browser(&opts.browser)?)?
            };
            info!("fetched {} history records", collection.len());
            collection.formatted(format)?
        }
        DataKind::Bookmarks => {
            let collection = if opts.browser.eq_ignore_ascii_case("all") {
                fetch::fetch_all_bookmarks()
            } else {
                fetch::fetch_bookmarks(selected_browser(&opts.browser)?)?
            };
            info!("fetched {} bookmark records", collection.len());
            collection.formatted(format)?
        }
    };

    match opts.output.as_deref() {
        Some(path) => std::fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}

fn selected_browser(name: &str) -> Result<&'static browsers::BrowserDescriptor> {
    match browsers::find(name) {
        Some(desc) => Ok(desc),
        None => bail!(
            "unknown browser {name}; available: all, {}",
            browsers::available_names()
        ),
    }
}

fn resolve_format(opts: &CliOptions) -> Result<OutputFormat> {
    if opts.format.eq_ignore_ascii_case("infer") {
        let inferred = opts
            .output
            .as_deref()
            .and_then(Path::extension)
            .and_then(|ext| ext.to_str())
            .unwrap_or("csv");
        return Ok(OutputFormat::from_name(inferred)?);
    }
    Ok(OutputFormat::from_name(&opts.format)?)
}
