use anyhow::{Result, anyhow};
use native_tls::TlsConnector;

use crate::config::{EmailSource, SearchMode};
use crate::mail::decoders::extract_html_part;

pub type Session = imap::Session<native_tls::TlsStream<std::net::TcpStream>>;

/// Which IMAP search predicate to issue for a resolved search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    /// Provider-extended full-text search (gmail's X-GM-RAW).
    Raw,
    /// Standard SUBJECT substring search.
    Subject,
}

fn select_strategy(mode: SearchMode, server: &str) -> Strategy {
    match mode {
        SearchMode::Raw => Strategy::Raw,
        SearchMode::Subject => Strategy::Subject,
        SearchMode::Auto if server.contains("gmail") => Strategy::Raw,
        SearchMode::Auto => Strategy::Subject,
    }
}

pub struct MailClient {
    cfg: EmailSource,
}

impl MailClient {
    pub fn new(cfg: EmailSource) -> Self {
        Self { cfg }
    }

    /// Connect over TLS, log in, and select the inbox.
    pub fn connect(&self) -> Result<Session> {
        log::info!("connecting to {}:993", self.cfg.server);
        let tls = TlsConnector::builder().build()?;
        let client = imap::connect(
            (self.cfg.server.as_str(), 993),
            self.cfg.server.as_str(),
            &tls,
        )?;
        let mut session = client
            .login(&self.cfg.login, &self.cfg.passwd)
            .map_err(|(e, _client)| anyhow!("IMAP login failed: {e}"))?;
        session.select("INBOX")?;
        Ok(session)
    }

    /// Search the inbox for notes-export messages, returning uids sorted
    /// ascending.
    pub fn search(&self, session: &mut Session) -> Result<Vec<u32>> {
        let query = match select_strategy(self.cfg.search, &self.cfg.server) {
            Strategy::Raw => format!("X-GM-RAW \"{}\"", self.cfg.subject),
            Strategy::Subject => format!("SUBJECT \"{}\"", self.cfg.subject),
        };
        log::debug!("uid search: {query}");
        let mut uids: Vec<u32> = session.uid_search(query)?.into_iter().collect();
        uids.sort_unstable();
        Ok(uids)
    }

    /// Fetch one message and pull out its decoded HTML part, if any.
    pub fn fetch_html(&self, session: &mut Session, uid: u32) -> Result<Option<String>> {
        let fetches = session.uid_fetch(uid.to_string(), "(UID BODY.PEEK[])")?;
        let fetch = fetches
            .iter()
            .next()
            .ok_or_else(|| anyhow!("message uid {uid} not found"))?;
        let raw = match fetch.body() {
            Some(bytes) => bytes,
            None => return Ok(None),
        };
        let parsed = mailparse::parse_mail(raw)?;
        Ok(extract_html_part(&parsed))
    }
}
