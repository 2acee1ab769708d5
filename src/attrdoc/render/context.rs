//! Render state shared by the handlers of one document

use super::ids::{IdRef, IdTable};
use std::fmt;

#[derive(Debug)]
enum Piece {
    Text(String),
    Id(IdRef),
}

/// Output buffer, current section and id table of one document build.
///
/// Text is appended directly; ids are appended as references and resolved
/// in [`finish`](RenderContext::finish), after every id has been handed out.
#[derive(Debug, Default)]
pub struct RenderContext {
    pieces: Vec<Piece>,
    section_id: String,
    ids: IdTable,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal output
    pub fn text(&mut self, text: &str) -> &mut Self {
        match self.pieces.last_mut() {
            Some(Piece::Text(last)) => last.push_str(text),
            _ => self.pieces.push(Piece::Text(text.to_string())),
        }
        self
    }

    /// Append an id by reference
    pub fn id(&mut self, id: IdRef) -> &mut Self {
        self.pieces.push(Piece::Id(id));
        self
    }

    pub fn unique_id(&mut self, id: &str) -> IdRef {
        self.ids.unique(id)
    }

    /// Id prefix of the current section, e.g. `Containers.`
    pub fn section_id(&self) -> &str {
        &self.section_id
    }

    pub fn set_section_id(&mut self, section_id: String) {
        self.section_id = section_id;
    }

    /// Resolve every id and return the document
    pub fn finish(self) -> String {
        let mut output = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Text(text) => output.push_str(text),
                Piece::Id(id) => output.push_str(self.ids.resolve(*id)),
            }
        }
        output
    }
}

impl fmt::Write for RenderContext {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;

    #[test]
    fn test_ids_resolve_after_collision() {
        let mut ctx = RenderContext::new();
        let first = ctx.unique_id("get");
        ctx.text("<a id=\"").id(first).text("\">");
        let second = ctx.unique_id("get");
        ctx.text("<a id=\"").id(second).text("\">");

        assert_eq!(ctx.finish(), "<a id=\"get.v1\"><a id=\"get.v2\">");
    }

    #[test]
    fn test_write_macro_appends_text() {
        let mut ctx = RenderContext::new();
        write!(ctx, "<h{}>", 4).unwrap();
        ctx.text("x");
        assert_eq!(ctx.finish(), "<h4>x");
    }

    #[test]
    fn test_section_id() {
        let mut ctx = RenderContext::new();
        assert_eq!(ctx.section_id(), "");
        ctx.set_section_id("Maps.".to_string());
        assert_eq!(ctx.section_id(), "Maps.");
    }
}
