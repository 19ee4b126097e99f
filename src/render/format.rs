use crate::config::RenderConfig;
use crate::domain::annotation::Annotation;

const HEADING_MARKS: [&str; 4] = ["#", "##", "###", "####"];

/// Render one annotation as an outline entry: the highlighted text with its
/// color marker, plus a nested second line when a note is attached.
pub fn format_annotation(cfg: &RenderConfig, a: &mut Annotation, indent: &str) -> String {
    let mut prefix = cfg.color_map.get(&a.color).cloned().unwrap_or_default();
    if HEADING_MARKS.contains(&prefix.as_str()) && cfg.join_titles {
        // Headings read badly across line breaks; flatten the highlight.
        a.text = a.text.split_whitespace().collect::<Vec<_>>().join(" ");
    }
    if !prefix.is_empty() {
        prefix.push(' ');
    }
    let mut fmtd = format!("{indent}- {prefix}{}", a.text);
    if cfg.include_chapter_in_notes {
        fmtd.push_str(&format!(" (Chapter '{}')", a.chapter));
    }
    if cfg.include_date_in_notes {
        fmtd.push_str(&format!("({})", a.date));
    }
    if !a.note.is_empty() {
        let mut icon = cfg.color_map.get("note").cloned().unwrap_or_default();
        if !icon.is_empty() {
            icon.push(' ');
        }
        fmtd.push_str(&format!("\n{indent}    - {icon}{}", a.note));
    }
    fmtd
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(color: &str, text: &str, note: &str) -> Annotation {
        Annotation {
            date: "2024-05-01".to_string(),
            chapter: "One".to_string(),
            color: color.to_string(),
            text: text.to_string(),
            note: note.to_string(),
        }
    }

    fn config_with(map: &[(&str, &str)]) -> RenderConfig {
        RenderConfig {
            color_map: map
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..RenderConfig::default()
        }
    }

    #[test]
    fn unmapped_color_gets_no_marker() {
        let cfg = RenderConfig::default();
        let mut a = annotation("yellow", "plain text", "");
        assert_eq!(format_annotation(&cfg, &mut a, ""), "- plain text");
    }

    #[test]
    fn mapped_color_gets_marker_and_single_space() {
        let cfg = config_with(&[("yellow", ">")]);
        let mut a = annotation("yellow", "The quick\nbrown fox", "");
        assert_eq!(
            format_annotation(&cfg, &mut a, ""),
            "- > The quick\nbrown fox"
        );
    }

    #[test]
    fn empty_note_yields_one_line() {
        let cfg = RenderConfig::default();
        let mut a = annotation("yellow", "text", "");
        assert_eq!(format_annotation(&cfg, &mut a, "").lines().count(), 1);
    }

    #[test]
    fn note_yields_second_line_indented_four_deeper() {
        let cfg = config_with(&[("note", "*")]);
        let mut a = annotation("yellow", "text", "a note");
        let out = format_annotation(&cfg, &mut a, "    ");
        assert_eq!(out, "    - text\n        - * a note");
    }

    #[test]
    fn heading_marker_with_join_titles_flattens_text() {
        let cfg = config_with(&[("yellow", "##")]);
        let mut a = annotation("yellow", "The quick\nbrown  fox", "");
        assert_eq!(format_annotation(&cfg, &mut a, ""), "- ## The quick brown fox");
        // The normalization is in place.
        assert_eq!(a.text, "The quick brown fox");
    }

    #[test]
    fn non_heading_marker_keeps_line_breaks() {
        let cfg = config_with(&[("yellow", ">")]);
        let mut a = annotation("yellow", "two\nlines", "");
        assert_eq!(format_annotation(&cfg, &mut a, ""), "- > two\nlines");
    }

    #[test]
    fn join_titles_disabled_keeps_heading_text() {
        let mut cfg = config_with(&[("yellow", "#")]);
        cfg.join_titles = false;
        let mut a = annotation("yellow", "two\nlines", "");
        assert_eq!(format_annotation(&cfg, &mut a, ""), "- # two\nlines");
    }

    #[test]
    fn chapter_and_date_decorations_are_adjacent() {
        let mut cfg = RenderConfig::default();
        cfg.include_chapter_in_notes = true;
        cfg.include_date_in_notes = true;
        let mut a = annotation("yellow", "text", "");
        assert_eq!(
            format_annotation(&cfg, &mut a, ""),
            "- text (Chapter 'One')(2024-05-01)"
        );
    }
}
