pub mod browsers;
pub mod cli;
pub mod error;
pub mod fetch;
pub mod format;
pub mod logging;
pub mod output;
pub mod parsers;
pub mod platform;
pub mod profiles;
pub mod records;
pub mod snapshot;

pub use error::Error;
pub use format::OutputFormat;
pub use output::OutputCollection;
pub use platform::Platform;
pub use records::{BookmarkRecord, HistoryRecord, RecordKind};
