//! Summary extraction from RSS and Atom documents.
//!
//! RSS items carry their text in `<description>`, Atom entries in `<summary>`
//! (or `<content>` when no summary is given).

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use quick_xml::events::Event;

use crate::error::Result;

/// Reads the summary text of every entry in a feed file.
pub fn read_feed_summaries<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    parse_feed_summaries(BufReader::new(file))
}

/// Collects one summary per `<item>`/`<entry>`, in document order.
///
/// Entries without any summary element yield an empty string.
pub fn parse_feed_summaries(rdr: impl BufRead) -> Result<Vec<String>> {
    let mut rdr = quick_xml::Reader::from_reader(rdr);
    let mut buf = vec![];
    let mut summaries = vec![];

    let mut in_entry = false;
    let mut capture: Option<Vec<u8>> = None;
    let mut summary: Option<String> = None;
    let mut content: Option<String> = None;
    let mut text = String::new();

    loop {
        buf.clear();
        match rdr.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = e.local_name();
                let name = name.as_ref();
                if name == b"item" || name == b"entry" {
                    in_entry = true;
                    summary = None;
                    content = None;
                } else if in_entry
                    && capture.is_none()
                    && (name == b"description" || name == b"summary" || name == b"content")
                {
                    capture = Some(name.to_vec());
                    text.clear();
                }
            }
            Event::Text(t) if capture.is_some() => {
                match t.unescape() {
                    Ok(s) => text.push_str(&s),
                    Err(_) => text.push_str(&String::from_utf8_lossy(&t)),
                }
            }
            Event::CData(c) if capture.is_some() => {
                text.push_str(&String::from_utf8_lossy(&c));
            }
            Event::End(e) => {
                let name = e.local_name();
                let name = name.as_ref();
                if capture.as_deref() == Some(name) {
                    capture = None;
                    let captured = std::mem::take(&mut text);
                    if name == b"content" {
                        content = Some(captured);
                    } else {
                        summary = Some(captured);
                    }
                } else if in_entry && (name == b"item" || name == b"entry") {
                    in_entry = false;
                    summaries.push(summary.take().or(content.take()).unwrap_or_default());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(summaries)
}
