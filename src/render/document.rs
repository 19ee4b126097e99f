use crate::config::RenderConfig;
use crate::domain::annotation::{Annotation, MetaData};
use crate::render::group::render_grouped;

/// Build the final notes document, or None when there is nothing to write.
pub fn assemble(
    cfg: &RenderConfig,
    meta: &MetaData,
    annotations: Vec<Annotation>,
) -> Option<String> {
    if annotations.is_empty() {
        return None;
    }
    let mut lines = Vec::new();
    if cfg.include_metadata {
        lines.push(format!("- title:: \"{}\"", meta.title));
        lines.push(format!("  author:: \"{}\"", meta.author));
        lines.push(format!("  source:: \"{}\"", meta.source));
        lines.push(format!(
            "  imported:: {}",
            meta.imported.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    lines.extend(render_grouped(cfg, cfg.group_by.keys(), annotations, ""));
    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(text: &str) -> Annotation {
        Annotation {
            date: "2024-05-01".to_string(),
            chapter: "One".to_string(),
            color: "yellow".to_string(),
            text: text.to_string(),
            note: String::new(),
        }
    }

    fn meta() -> MetaData {
        MetaData {
            title: "Sample Book".to_string(),
            author: "A. Author".to_string(),
            ..MetaData::default()
        }
    }

    #[test]
    fn empty_annotation_list_yields_no_document() {
        let cfg = RenderConfig::default();
        assert!(assemble(&cfg, &meta(), Vec::new()).is_none());
    }

    #[test]
    fn metadata_block_comes_first_with_exact_lines() {
        let cfg = RenderConfig::default();
        let doc = assemble(&cfg, &meta(), vec![annotation("text")]).unwrap();
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines[0], "- title:: \"Sample Book\"");
        assert_eq!(lines[1], "  author:: \"A. Author\"");
        assert_eq!(lines[2], "  source:: \"Unspecified\"");
        assert!(lines[3].starts_with("  imported:: "));
        assert_eq!(lines[4], "- text");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn metadata_block_can_be_disabled() {
        let mut cfg = RenderConfig::default();
        cfg.include_metadata = false;
        let doc = assemble(&cfg, &meta(), vec![annotation("text")]).unwrap();
        assert_eq!(doc, "- text");
    }

    #[test]
    fn grouping_keys_come_from_config() {
        let cfg: RenderConfig = serde_json::from_str(r#"{"group_by": "chapter"}"#).unwrap();
        let doc = assemble(&cfg, &meta(), vec![annotation("text")]).unwrap();
        assert!(doc.lines().any(|l| l == "- # One"));
        assert!(doc.lines().any(|l| l == "    - text"));
    }
}
