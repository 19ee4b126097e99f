use std::fs::OpenOptions;
use std::io::Write;

use anyhow::Result;

use crate::config::RenderConfig;
use crate::domain::annotation::MetaData;

/// Replace characters that are unsafe in file names.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

pub fn notes_filename(meta: &MetaData) -> String {
    sanitize_filename(&format!("{}-{}-Notes.md", meta.title, meta.author))
}

/// Dump the document to stdout or to the per-book notes file.
pub fn write_notes(cfg: &RenderConfig, meta: &MetaData, doc: &str) -> Result<()> {
    if cfg.dump_stdout {
        println!("{doc}");
        return Ok(());
    }
    let fname = notes_filename(meta);
    let mut opts = OpenOptions::new();
    opts.create(true);
    if cfg.append_file {
        opts.append(true);
    } else {
        opts.write(true).truncate(true);
    }
    let mut file = opts.open(&fname)?;
    if cfg.append_file {
        file.write_all(b"\n")?;
    }
    file.write_all(doc.as_bytes())?;
    println!("Annotations written in {fname}");
    Ok(())
}
