use std::io::Write;

use anyhow::Result;
use char_diff::{DiffEvent, EventSink};

/// Standalone page header with the collation stylesheet
pub const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset='utf-8' />
<style>
  ins {
    color:blue; font-weight: normal;
  }
  del,
  strike {
    color:purple;
    text-decoration: none;
    line-height: 1.4;
    background-image: -webkit-gradient(linear, left top, left bottom, from(transparent), color-stop(0.63em, transparent), color-stop(0.63em, #ff0000), color-stop(0.7em, #ff0000), color-stop(0.7em, transparent), to(transparent));
    background-image: -webkit-linear-gradient(top, transparent 0em, transparent 0.63em, #ff0000 0.63em, #ff0000 0.7em, transparent 0.7em, transparent 1.4em);
    background-image: -o-linear-gradient(top, transparent 0em, transparent 0.63em, #ff0000 0.63em, #ff0000 0.7em, transparent 0.7em, transparent 1.4em);
    background-image: linear-gradient(to bottom, transparent 0em, transparent 0.63em, #ff0000 0.63em, #ff0000 0.7em, transparent 0.7em, transparent 1.4em);
    -webkit-background-size: 1.4em 1.4em;
    background-size: 1.4em 1.4em;
    background-repeat: repeat;
  }
</style>
<link href='collateouter.css' rel='stylesheet' type='text/css'>
<title>collate generated comparison</title>
</head>
<body>"#;

pub const HTML_TAIL: &str = "</body>\n</html>";

/// Escape diffed text for embedding in the HTML body
///
/// Line terminators are made visible (`\n`, `\r`) because the actual line
/// layout is carried by `<br />` markers, and markup metacharacters become
/// entities.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders diff events as HTML: `<del>`, `<ins>`, plain text and `<br />`
pub struct HtmlSink<W: Write> {
    writer: W,
}

impl<W: Write> HtmlSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> EventSink for HtmlSink<W> {
    fn emit(&mut self, event: DiffEvent) -> Result<()> {
        match event {
            DiffEvent::Deleted(text) => {
                write!(self.writer, "<del>{}</del>", escape(&text))?;
            }
            DiffEvent::Inserted(text) => {
                write!(self.writer, "<ins>{}</ins>", escape(&text))?;
            }
            DiffEvent::Unchanged(text) => {
                write!(self.writer, "{}", escape(&text))?;
            }
            DiffEvent::LineBreak => {
                write!(self.writer, "<br />")?;
            }
        }
        Ok(())
    }
}
