use anyhow::Result;

use crate::config::Config;
use crate::error::ConfigError;
use crate::mail::imap_client::{MailClient, Session};
use crate::output::write_notes;
use crate::render::document::assemble;
use crate::scrape::dom::Backend;
use crate::scrape::extract::extract;

/// Connect to the mailbox, find every notes-export message, and write one
/// notes document per message. A message that fails to fetch or parse is
/// skipped with a warning; the run continues.
pub fn process_mailbox(cfg: &Config) -> Result<()> {
    let backend = Backend::from_name(&cfg.options.html_parser)
        .ok_or_else(|| ConfigError::UnknownBackend(cfg.options.html_parser.clone()))?;

    let client = MailClient::new(cfg.email.clone());
    let mut session = client.connect()?;
    let uids = client.search(&mut session)?;
    if uids.is_empty() {
        println!(
            "You don't have any email in your inbox whose subject contains {:?}",
            cfg.email.subject
        );
        println!("You may need to change that string in the configuration file");
        session.logout()?;
        return Ok(());
    }
    log::info!("{} matching message(s)", uids.len());

    for uid in uids {
        if let Err(e) = process_message(&client, &mut session, backend, cfg, uid) {
            log::warn!("skipping message uid {uid}: {e:#}");
        }
    }
    session.logout()?;
    Ok(())
}

fn process_message(
    client: &MailClient,
    session: &mut Session,
    backend: Backend,
    cfg: &Config,
    uid: u32,
) -> Result<()> {
    let html = match client.fetch_html(session, uid)? {
        Some(html) => html,
        None => {
            log::debug!("uid {uid} has no html part");
            return Ok(());
        }
    };
    let dom = backend.parse(&html);
    let (meta, annotations) = extract(&dom)?;
    match assemble(&cfg.options, &meta, annotations) {
        Some(doc) => write_notes(&cfg.options, &meta, &doc),
        None => {
            log::debug!("uid {uid}: no annotations extracted");
            Ok(())
        }
    }
}
