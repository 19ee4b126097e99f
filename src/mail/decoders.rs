use mailparse::ParsedMail;

/// Walk a parsed message and return the decoded body of the first
/// `text/html` part, depth-first.
pub fn extract_html_part(part: &ParsedMail) -> Option<String> {
    let mime = part.ctype.mimetype.to_ascii_lowercase();
    if mime == "text/html" {
        return part.get_body().ok();
    }
    for sub in &part.subparts {
        if let Some(html) = extract_html_part(sub) {
            return Some(html);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_html_part_in_multipart_message() {
        let raw = concat!(
            "Subject: Notes from \"Sample Book\"\r\n",
            "MIME-Version: 1.0\r\n",
            "Content-Type: multipart/mixed; boundary=\"sep\"\r\n",
            "\r\n",
            "--sep\r\n",
            "Content-Type: text/plain; charset=utf-8\r\n",
            "\r\n",
            "plain fallback\r\n",
            "--sep\r\n",
            "Content-Type: text/html; charset=utf-8\r\n",
            "\r\n",
            "<html><body><h1>Sample Book</h1></body></html>\r\n",
            "--sep--\r\n",
        );
        let parsed = mailparse::parse_mail(raw.as_bytes()).unwrap();
        let html = extract_html_part(&parsed).unwrap();
        assert!(html.contains("<h1>Sample Book</h1>"));
    }

    #[test]
    fn plain_only_message_has_no_html_part() {
        let raw = "Subject: x\r\nContent-Type: text/plain\r\n\r\njust text\r\n";
        let parsed = mailparse::parse_mail(raw.as_bytes()).unwrap();
        assert!(extract_html_part(&parsed).is_none());
    }
}
