use anyhow::{Result, anyhow};
use markup5ever_rcdom::Handle;

use crate::domain::annotation::{Annotation, MetaData};
use crate::scrape::dom::{self, Dom};

/// Scrape a notes-export document for book metadata and every annotation it
/// contains, in document order.
pub fn extract(doc: &Dom) -> Result<(MetaData, Vec<Annotation>)> {
    let mut annotations = Vec::new();
    for block in doc.find_all_class("annotation") {
        annotations.push(extract_annotation(&block)?);
    }

    let mut meta = MetaData::default();
    meta.title = tag_text_or_placeholder(doc, "h1");
    meta.author = tag_text_or_placeholder(doc, "h2");
    if let Some(citation) = doc.find_class("citation") {
        // Only the first physical line of the citation is the source.
        let text = dom::text(&citation);
        meta.source = text.trim().lines().next().unwrap_or("").trim().to_string();
    }
    Ok((meta, annotations))
}

fn extract_annotation(block: &Handle) -> Result<Annotation> {
    let date = class_text(block, "annotationdate")?;
    let chapter = class_text(block, "annotationchapter")?;
    let marker = dom::find_class(block, "annotationselectionMarker")
        .ok_or_else(|| anyhow!("annotation block has no 'annotationselectionMarker' element"))?;
    // The highlight color is encoded as the last class token of the marker.
    let color = dom::classes(&marker)
        .pop()
        .ok_or_else(|| anyhow!("selection marker carries no color class"))?;
    let text = class_text(block, "annotationrepresentativetext")?;
    let note = class_text(block, "annotationnote")?;
    Ok(Annotation {
        date,
        chapter,
        color,
        text,
        note,
    })
}

fn class_text(block: &Handle, class: &str) -> Result<String> {
    let node = dom::find_class(block, class)
        .ok_or_else(|| anyhow!("annotation block has no '{class}' element"))?;
    Ok(dom::text(&node).trim().to_string())
}

fn tag_text_or_placeholder(doc: &Dom, tag: &str) -> String {
    match doc.find_tag(tag) {
        Some(node) => dom::text(&node).trim().to_string(),
        None => "Not specified".to_string(),
    }
}
