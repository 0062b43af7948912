//! Minimal HTML document writer on top of `quick-xml`.

use std::io::Cursor;

use quick_xml::{
  Writer,
  events::{BytesEnd, BytesStart, BytesText, Event},
};

use crate::{Error, Result};

pub struct HtmlWriter {
  writer: Writer<Cursor<Vec<u8>>>,
}

impl HtmlWriter {
  /// Start a document with the HTML5 doctype.
  pub fn new() -> Result<Self> {
    let mut w = Self {
      writer: Writer::new(Cursor::new(Vec::new())),
    };
    w.emit(Event::DocType(BytesText::from_escaped("html")))?;
    Ok(w)
  }

  fn emit(&mut self, event: Event<'_>) -> Result<()> {
    self
      .writer
      .write_event(event)
      .map_err(|e| Error::Xml(e.to_string()))
  }

  pub fn start(&mut self, tag: &str) -> Result<()> {
    self.emit(Event::Start(BytesStart::new(tag)))
  }

  /// Open `tag` with a `class` attribute.
  pub fn start_class(&mut self, tag: &str, class: &str) -> Result<()> {
    let mut el = BytesStart::new(tag);
    el.push_attribute(("class", class));
    self.emit(Event::Start(el))
  }

  pub fn end(&mut self, tag: &str) -> Result<()> {
    self.emit(Event::End(BytesEnd::new(tag)))
  }

  /// Void element with attributes, e.g. `<meta charset="utf-8"/>`.
  pub fn empty(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut el = BytesStart::new(tag);
    for (k, v) in attrs {
      el.push_attribute((*k, *v));
    }
    self.emit(Event::Empty(el))
  }

  /// Escaped text content.
  pub fn text(&mut self, text: &str) -> Result<()> {
    self.emit(Event::Text(BytesText::new(text)))
  }

  /// Unescaped content. Only for trusted constants such as stylesheets.
  pub fn raw(&mut self, content: &str) -> Result<()> {
    self.emit(Event::Text(BytesText::from_escaped(content)))
  }

  pub fn text_elem(&mut self, tag: &str, text: &str) -> Result<()> {
    self.start(tag)?;
    self.text(text)?;
    self.end(tag)
  }

  pub fn class_elem(&mut self, tag: &str, class: &str, text: &str) -> Result<()> {
    self.start_class(tag, class)?;
    self.text(text)?;
    self.end(tag)
  }

  /// `<tag class=".."><strong>label</strong> value</tag>`
  pub fn labelled(&mut self, tag: &str, class: Option<&str>, label: &str, value: &str) -> Result<()> {
    match class {
      Some(class) => self.start_class(tag, class)?,
      None => self.start(tag)?,
    }
    self.text_elem("strong", label)?;
    self.text(&format!(" {value}"))?;
    self.end(tag)
  }

  pub fn finish(self) -> Result<String> {
    Ok(String::from_utf8(self.writer.into_inner().into_inner())?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escapes_text_but_not_raw() {
    let mut w = HtmlWriter::new().unwrap();
    w.start("body").unwrap();
    w.class_elem("div", "title", "R&D <Lead>").unwrap();
    w.start("style").unwrap();
    w.raw("p > span { color: red; }").unwrap();
    w.end("style").unwrap();
    w.end("body").unwrap();
    let html = w.finish().unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<div class="title">R&amp;D &lt;Lead&gt;</div>"#));
    assert!(html.contains("p > span { color: red; }"));
  }

  #[test]
  fn labelled_paragraph() {
    let mut w = HtmlWriter::new().unwrap();
    w.labelled("p", None, "Number of Positions:", "3").unwrap();
    let html = w.finish().unwrap();
    assert!(html.ends_with("<p><strong>Number of Positions:</strong> 3</p>"));
  }
}
