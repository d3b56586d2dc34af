use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    History,
    Bookmarks,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliOptions {
    /// Record kind to fetch
    #[arg(short = 't', long = "type", value_enum, default_value_t = DataKind::History)]
    pub kind: DataKind,

    /// Browser to fetch from; "all" aggregates every supported browser
    #[arg(short, long, default_value = "all")]
    pub browser: String,

    /// Output format (csv, json, jsonl); "infer" picks from the output
    /// file's extension and falls back to csv
    #[arg(short, long, default_value = "infer")]
    pub format: String,

    /// File to write to (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn parse() -> CliOptions {
    CliOptions::parse()
}

#[cfg(test)]
mod tests {
    use super::{CliOptions, DataKind};
    use clap::Parser;

    #[test]
    fn defaults_to_history_from_all_browsers() {
        let opts = CliOptions::try_parse_from(["trailhound"]).expect("parse");
        assert_eq!(opts.kind, DataKind::History);
        assert_eq!(opts.browser, "all");
        assert_eq!(opts.format, "infer");
        assert!(opts.output.is_none());
    }

    #[test]
    fn parses_bookmarks_kind() {
        let opts = CliOptions::try_parse_from(["trailhound", "--type", "bookmarks"]).expect("parse");
        assert_eq!(opts.kind, DataKind::Bookmarks);
    }

    #[test]
    fn parses_browser_and_format() {
        let opts = CliOptions::try_parse_from([
            "trailhound",
            "--browser",
            "firefox",
            "--format",
            "jsonl",
            "--output",
            "out.jsonl",
        ])
        .expect("parse");
        assert_eq!(opts.browser, "firefox");
        assert_eq!(opts.format, "jsonl");
        assert_eq!(opts.output.as_deref(), Some(std::path::Path::new("out.jsonl")));
    }
}
