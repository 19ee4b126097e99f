use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level configuration file: an `email` section describing where the
/// notes-export mails live, and an `options` section tuning the rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub email: EmailSource,
    #[serde(default)]
    pub options: RenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailSource {
    pub server: String,
    pub login: String,
    pub passwd: String,
    /// Exact subject substring the notes-export mails carry.
    pub subject: String,
    #[serde(default)]
    pub search: SearchMode,
}

/// How to search the mailbox for matching messages. `auto` picks `raw` for
/// servers whose address contains "gmail" and `subject` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Auto,
    Raw,
    Subject,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// If true, include a first block with metadata.
    pub include_metadata: bool,
    /// If true, append instead of overwriting.
    pub append_file: bool,
    /// If true, each note includes the date in which it was taken.
    pub include_date_in_notes: bool,
    /// If true, each note includes the chapter to which it belongs.
    pub include_chapter_in_notes: bool,
    /// Annotation field name(s) to group by, outermost first.
    pub group_by: GroupBy,
    /// Maps between highlight colors and markers or icons.
    pub color_map: HashMap<String, String>,
    /// If a color is replaced by a heading mark, join with spaces all lines
    /// in that highlight.
    pub join_titles: bool,
    /// Dump to stdout instead of a file.
    pub dump_stdout: bool,
    /// Markup backend name, see `scrape::Backend`.
    pub html_parser: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            include_metadata: true,
            append_file: false,
            include_date_in_notes: false,
            include_chapter_in_notes: false,
            group_by: GroupBy::default(),
            color_map: HashMap::new(),
            join_titles: true,
            dump_stdout: false,
            html_parser: "html5ever".to_string(),
        }
    }
}

/// `group_by` accepts a single key or a list of keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GroupBy {
    One(String),
    Many(Vec<String>),
}

impl GroupBy {
    pub fn keys(&self) -> &[String] {
        match self {
            GroupBy::One(key) => std::slice::from_ref(key),
            GroupBy::Many(keys) => keys,
        }
    }
}

impl Default for GroupBy {
    fn default() -> Self {
        GroupBy::One("all".to_string())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("booknotes").join("config.json"))
}

/// Load the configuration file, stripping `#` comment lines before the JSON
/// parse. A missing file gets a commented sample written in its place.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        if let Err(e) = write_sample(path) {
            log::warn!("could not write sample config to {}: {e}", path.display());
        }
        return Err(ConfigError::Missing(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&strip_comments(&raw)).map_err(|source| ConfigError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Drop every line whose first non-whitespace character is `#`.
fn strip_comments(raw: &str) -> String {
    raw.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

const SAMPLE_CONFIG: &str = r##"# booknotes configuration.
# Lines starting with '#' are comments and are stripped before JSON parsing.
{
    "email": {
        "server": "imap.example.com",
        "login": "you@example.com",
        "passwd": "app-password",
        # Exact subject substring of the notes-export mails.
        "subject": "Notes from"
    },
    "options": {
        "group_by": "chapter",
        "color_map": {"yellow": "#", "green": ">", "note": "*"}
    }
}
"##;

fn write_sample(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, SAMPLE_CONFIG)
}
