use crate::config::RenderConfig;
use crate::domain::annotation::Annotation;
use crate::render::format::format_annotation;

/// Group annotations by the leading key and render an indented outline,
/// recursing into each group with the remaining keys. Grouping stops when no
/// keys remain, the key is not an annotation field, or the list is empty;
/// the annotations are then formatted flat at the current indent.
pub fn render_grouped(
    cfg: &RenderConfig,
    group_keys: &[String],
    mut annotations: Vec<Annotation>,
    indent: &str,
) -> Vec<String> {
    let group_key = match group_keys.first() {
        Some(key) if annotations.first().is_some_and(|a| a.field(key).is_some()) => key.clone(),
        _ => {
            return annotations
                .iter_mut()
                .map(|a| format_annotation(cfg, a, indent))
                .collect();
        }
    };

    // Stable sort keeps document order inside each group.
    annotations.sort_by(|a, b| a.field(&group_key).cmp(&b.field(&group_key)));

    let level = indent.len() / 4;
    let header = "#".repeat(level + 1);
    let child_indent = format!("{indent}    ");
    let mut lines = Vec::new();
    for run in annotations.chunk_by(|a, b| a.field(&group_key) == b.field(&group_key)) {
        let value = run[0].field(&group_key).unwrap_or("");
        lines.push(format!("{indent}- {header} {value}"));
        lines.extend(render_grouped(
            cfg,
            &group_keys[1..],
            run.to_vec(),
            &child_indent,
        ));
    }
    lines
}
