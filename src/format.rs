use serde::Serialize;
use serde::ser::SerializeMap;

use crate::error::Error;
use crate::output::OutputCollection;
use crate::records::DomainRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
    Jsonl,
}

pub const FORMAT_NAMES: &[&str] = &["csv", "json", "jsonl"];

impl OutputFormat {
    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(Error::UnsupportedFormat {
                requested: name.to_string(),
                valid: FORMAT_NAMES.join(", "),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }
}

pub fn render<R: DomainRecord>(
    collection: &OutputCollection<R>,
    format: OutputFormat,
) -> Result<String, Error> {
    match format {
        OutputFormat::Csv => to_csv(collection.entries()),
        OutputFormat::Json => to_json(collection.entries()),
        OutputFormat::Jsonl => to_jsonl(collection.entries()),
    }
}

fn to_csv<R: DomainRecord>(entries: &[R]) -> Result<String, Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    // Header goes out unconditionally, even for an empty collection.
    writer
        .write_record(R::kind().fields())
        .map_err(render_err)?;
    for record in entries {
        writer.serialize(record).map_err(render_err)?;
    }
    let bytes = writer.into_inner().map_err(render_err)?;
    String::from_utf8(bytes).map_err(render_err)
}

/// Single-key wrapper keeping the record structs' field order intact, which
/// a round trip through `serde_json::Value` would not.
struct Document<'a, R: Serialize>(&'static str, &'a [R]);

impl<'a, R: Serialize> Serialize for Document<'a, R> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0, self.1)?;
        map.end()
    }
}

fn to_json<R: DomainRecord>(entries: &[R]) -> Result<String, Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    Document(R::kind().key(), entries)
        .serialize(&mut ser)
        .map_err(render_err)?;
    String::from_utf8(buf).map_err(render_err)
}

fn to_jsonl<R: DomainRecord>(entries: &[R]) -> Result<String, Error> {
    let lines = entries
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()
        .map_err(render_err)?;
    Ok(lines.join("\n"))
}

fn render_err(err: impl std::fmt::Display) -> Error {
    Error::Render(err.to_string())
}
