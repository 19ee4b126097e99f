use chrono::{DateTime, Local};

/// One highlighted passage plus the user note attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub date: String,
    pub chapter: String,
    pub color: String,
    pub text: String,
    pub note: String,
}

impl Annotation {
    /// Look up a grouping field by name. Unknown names return None, which
    /// ends the grouping recursion.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "date" => Some(&self.date),
            "chapter" => Some(&self.chapter),
            "color" => Some(&self.color),
            "text" => Some(&self.text),
            "note" => Some(&self.note),
            _ => None,
        }
    }
}

/// Book-level metadata scraped from the export, one per processed message.
#[derive(Debug, Clone)]
pub struct MetaData {
    pub title: String,
    pub author: String,
    pub source: String,
    pub imported: DateTime<Local>,
}

impl Default for MetaData {
    fn default() -> Self {
        MetaData {
            title: "Untitled".to_string(),
            author: "Unknown".to_string(),
            source: "Unspecified".to_string(),
            imported: Local::now(),
        }
    }
}
