//! HTML handlers for API documentation
//!
//! - [`HeaderHandler`]: `<hN>` section headers; sets the id prefix for the
//!   entries that follow
//! - [`ParagraphHandler`]: `<p>` blocks
//! - [`ListingHandler`]: function and member entries, collected into one
//!   `<ul class="doc_list">` per stretch of adjacent listings
//!
//! Tag values and names are HTML-escaped. Paragraph and description bodies
//! are written as-is so documents can carry inline markup.

use super::context::RenderContext;
use super::ids::{text_to_id, IdRef};
use crate::attrdoc::ast::Node;
use crate::attrdoc::dispatch::{DispatchError, Handler};
use html_escape::{encode_quoted_attribute, encode_text};
use std::fmt::Write;

/// Section header of a fixed level
pub struct HeaderHandler {
    level: u8,
}

impl HeaderHandler {
    pub fn new(level: u8) -> Self {
        HeaderHandler { level }
    }
}

impl Handler<RenderContext> for HeaderHandler {
    fn process(&mut self, node: &Node, ctx: &mut RenderContext) -> Result<(), DispatchError> {
        let label = node.get_value();
        let id = node
            .get_attribute("id")
            .and_then(Node::value)
            .unwrap_or(label);
        ctx.set_section_id(format!("{}.", text_to_id(id)));

        let id = encode_quoted_attribute(id);
        write!(
            ctx,
            "<h{level} id=\"{id}\"><span class=\"hardlink_text\">{label}<a class=\"hardlink\" href=\"#{id}\"></a></span></h{level}>",
            level = self.level,
            label = encode_text(label),
        )?;
        Ok(())
    }
}

pub struct ParagraphHandler;

impl Handler<RenderContext> for ParagraphHandler {
    fn process(&mut self, node: &Node, ctx: &mut RenderContext) -> Result<(), DispatchError> {
        ctx.text("<p>").text(node.get_value()).text("</p>");
        Ok(())
    }
}

/// What a listing entry documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    /// `\fn` entries: signature, parameters, return value
    Function,
    /// `\member` entries: one or more names sharing a description
    Member,
}

/// Function or member listing.
///
/// Both modes are the same handler kind, so a function run directly followed
/// by a member run shares one list.
pub struct ListingHandler {
    mode: ListingMode,
}

impl ListingHandler {
    pub fn new(mode: ListingMode) -> Self {
        ListingHandler { mode }
    }

    fn is_listing(&self, neighbour: Option<&dyn Handler<RenderContext>>) -> bool {
        neighbour.is_some_and(|handler| handler.kind() == self.kind())
    }
}

impl Handler<RenderContext> for ListingHandler {
    fn process(&mut self, node: &Node, ctx: &mut RenderContext) -> Result<(), DispatchError> {
        match self.mode {
            ListingMode::Function => write_function(node, ctx),
            ListingMode::Member => write_member(node, ctx),
        }
        Ok(())
    }

    fn group_start(
        &mut self,
        _node: &Node,
        previous: Option<&dyn Handler<RenderContext>>,
        ctx: &mut RenderContext,
    ) -> Result<(), DispatchError> {
        if !self.is_listing(previous) {
            ctx.text("<p><ul class=\"doc_list\">");
        }
        Ok(())
    }

    fn group_end(
        &mut self,
        _node: &Node,
        next: Option<&dyn Handler<RenderContext>>,
        ctx: &mut RenderContext,
    ) -> Result<(), DispatchError> {
        if !self.is_listing(next) {
            ctx.text("</ul></p>");
        }
        Ok(())
    }
}

/// Reserve the entry id: section prefix, name, then template arguments
fn entry_id(ctx: &mut RenderContext, name: &str, templates: &[&Node]) -> IdRef {
    let mut id = format!("{}{}", ctx.section_id(), text_to_id(name));
    if !templates.is_empty() {
        let args: Vec<_> = templates.iter().map(|t| text_to_id(t.get_value())).collect();
        id.push('.');
        id.push_str(&args.join("."));
    }
    ctx.unique_id(&encode_quoted_attribute(&id))
}

/// `<li>`, the block and its display-mode toggles
fn open_entry(ctx: &mut RenderContext, id: IdRef) {
    ctx.text("<li><div class=\"doc_block\" id=\"").id(id).text("\">");
    ctx.text("<input type=\"radio\" class=\"doc_block_display_mode doc_block_display_mode_0\" value=\"0\" id=\"")
        .id(id)
        .text(".display.0\" name=\"")
        .id(id)
        .text(".display.mode\" checked />");
    ctx.text("<input type=\"radio\" class=\"doc_block_display_mode doc_block_display_mode_1\" value=\"1\" id=\"")
        .id(id)
        .text(".display.1\" name=\"")
        .id(id)
        .text(".display.mode\" />");
    ctx.text("<div class=\"doc_block_indicator hardlink_text\"><span class=\"doc_block_indicator_inner\">")
        .text("<label class=\"doc_block_indicator_text\" for=\"")
        .id(id)
        .text(".display.1\"></label>")
        .text("<label class=\"doc_block_indicator_text\" for=\"")
        .id(id)
        .text(".display.0\"></label>")
        .text("</span><a class=\"doc_block_indicator_hardlink hardlink\" href=\"#")
        .id(id)
        .text("\"></a></div>");
}

fn write_templates(ctx: &mut RenderContext, templates: &[&Node]) {
    if templates.is_empty() {
        return;
    }
    ctx.text("<span class=\"doc_template\">&lt;");
    for (i, arg) in templates.iter().enumerate() {
        if i > 0 {
            ctx.text(", ");
        }
        ctx.text("<span class=\"doc_template_arg\">")
            .text(&encode_text(arg.get_value()))
            .text("</span>");
    }
    ctx.text("&gt;</span>");
}

/// `Object<Args>.` or `Object<Args>::` for static entries
fn write_object(ctx: &mut RenderContext, node: &Node) {
    let Some(obj) = node.get_attribute("obj") else {
        return;
    };
    ctx.text("<span class=\"doc_obj\">")
        .text(&encode_text(obj.get_value()))
        .text("</span>");
    write_templates(ctx, &node.get_attributes("obj_template"));

    let punct = if node.get_attribute("static").is_some() {
        "::"
    } else {
        "."
    };
    ctx.text("<span class=\"doc_punct\">").text(punct).text("</span>");
}

/// `<id>.<param id>`, the anchor of a parameter description
fn write_param_anchor(ctx: &mut RenderContext, id: IdRef, param: &Node) {
    ctx.id(id)
        .text(".")
        .text(&encode_quoted_attribute(&text_to_id(param.get_value())));
}

fn write_function(node: &Node, ctx: &mut RenderContext) {
    let name = node.get_value();
    let templates = node.get_attributes("template");
    let return_attr = node.get_attribute("return");
    let params = node.get_attributes("arg");

    let id = entry_id(ctx, name, &templates);
    open_entry(ctx, id);

    // Signature
    ctx.text("<code class=\"doc_head doc_params_block")
        .text(if params.is_empty() { " doc_params_none" } else { "" })
        .text("\">");

    if let Some(ret) = return_attr {
        ctx.text("<span class=\"doc_return_container\"><a class=\"doc_return\" href=\"#")
            .id(id)
            .text(".return\"><span>")
            .text(&encode_text(ret.get_value()))
            .text("</span></a> </span>");
    }

    write_object(ctx, node);

    ctx.text("<label class=\"doc_name\" for=\"")
        .id(id)
        .text(".display.1\"><span>")
        .text(&encode_text(name))
        .text("</span>");
    write_templates(ctx, &templates);
    ctx.text("</label><span class=\"doc_params_outer\">(<span class=\"doc_params\">");

    for (i, param) in params.iter().enumerate() {
        let keyword = if param.get_attribute("keyword").is_some() {
            " doc_param_keyword"
        } else {
            ""
        };
        ctx.text("<span class=\"doc_param")
            .text(keyword)
            .text("\"><span><a class=\"doc_param_name\" href=\"#");
        write_param_anchor(ctx, id, param);
        ctx.text("\">");

        if let Some(ty) = param.get_attribute("type") {
            ctx.text("<span class=\"doc_param_type\">")
                .text(&encode_text(ty.get_value()))
                .text("</span> ");
        }
        ctx.text("<span>")
            .text(&encode_text(param.get_value()))
            .text("</span></a>");

        if let Some(default) = param.get_attribute("default") {
            ctx.text("=<span class=\"doc_param_default\">")
                .text(&encode_text(default.get_value()))
                .text("</span>");
        }

        ctx.text("</span>");
        if i + 1 < params.len() {
            ctx.text(", ");
        }
        ctx.text("</span>");
    }

    ctx.text("</span>");
    if !params.is_empty() {
        ctx.text("<span class=\"doc_params_placeholder\">...</span>");
    }
    ctx.text(")</span></code>");

    // Descriptions
    ctx.text("<div class=\"doc_descriptions\">");
    if let Some(desc) = node.get_attribute("desc") {
        ctx.text("<div class=\"doc_description doc_description_main\">")
            .text(desc.get_value())
            .text("</div>");
    }

    for param in templates.iter().chain(params.iter()) {
        let desc = param.get_attribute("desc");
        let ty = param.get_attribute("type");
        if desc.is_none() && ty.is_none() {
            continue;
        }

        ctx.text("<div class=\"doc_description doc_description_param\" id=\"");
        write_param_anchor(ctx, id, param);
        ctx.text("\"><code><a class=\"doc_description_param_name\" href=\"#");
        write_param_anchor(ctx, id, param);
        ctx.text("\"><span>")
            .text(&encode_text(param.get_value()))
            .text("</span></a>");

        if let Some(ty) = ty {
            ctx.text("<span class=\"doc_param_type\"> : ")
                .text(&encode_text(ty.get_value()))
                .text("</span>");
        }
        ctx.text("</code>");

        if let Some(desc) = desc {
            ctx.text("<div class=\"doc_description_body\">")
                .text(desc.get_value())
                .text("</div>");
        }
        ctx.text("</div>");
    }

    if let Some(ret) = return_attr {
        ctx.text("<div class=\"doc_description doc_description_return\" id=\"")
            .id(id)
            .text(".return\"><code><a class=\"doc_description_return_name\" href=\"#")
            .id(id)
            .text(".return\"><span>return</span></a>");
        if let Some(ty) = ret.value() {
            ctx.text("<span class=\"doc_param_type\"> : ")
                .text(&encode_text(ty))
                .text("</span>");
        }
        ctx.text("</code>");

        if let Some(desc) = ret.get_attribute("desc") {
            ctx.text("<div class=\"doc_description_body\">")
                .text(desc.get_value())
                .text("</div>");
        }
        ctx.text("</div>");
    }

    ctx.text("</div></div></li>");
}

fn write_member(node: &Node, ctx: &mut RenderContext) {
    let templates = node.get_attributes("template");
    let named_by = node.get_attribute("id").unwrap_or(node);

    let id = entry_id(ctx, named_by.get_value(), &templates);
    open_entry(ctx, id);

    // One header line per name: the member itself, then every `\also`
    let names: Vec<&Node> = std::iter::once(node)
        .chain(node.get_attributes("also"))
        .collect();

    ctx.text("<div class=\"doc_head\">");
    for (i, member) in names.iter().enumerate() {
        let member_id = format!("{}{}", ctx.section_id(), text_to_id(member.get_value()));
        ctx.text("<div class=\"doc_member_entry\" id=\"")
            .text(&encode_quoted_attribute(&member_id))
            .text("\">");

        if let Some(ty) = member.get_attribute("type") {
            ctx.text("<span class=\"doc_return_container\">")
                .text(&encode_text(ty.get_value()))
                .text("</span> ");
        }

        write_object(ctx, node);

        ctx.text("<span class=\"doc_member\"><span><label class=\"doc_member_name\" for=\"")
            .id(id)
            .text(".display.1\"><span>")
            .text(&encode_text(member.get_value()))
            .text("</span></label>");

        if let Some(value) = member.get_attribute("value") {
            ctx.text("=<span class=\"doc_member_value\">")
                .text(&encode_text(value.get_value()))
                .text("</span>");
        }

        ctx.text("</span></span>");
        if i + 1 < names.len() {
            ctx.text(",");
        }
        ctx.text("</div>");
    }
    ctx.text("</div>");

    if let Some(desc) = node.get_attribute("desc") {
        ctx.text("<div class=\"doc_descriptions\"><div class=\"doc_description doc_description_main\">")
            .text(desc.get_value())
            .text("</div></div>");
    }

    ctx.text("</div></li>");
}
