use crate::renderer::CanvasRenderer;
use crate::vdom::VNode;
use mockup_editor::EditorState;

/// Options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Document title
    pub title: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            title: "Mockup".to_string(),
        }
    }
}

struct Context<'a> {
    options: &'a HtmlOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a HtmlOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Serialize a canvas tree to an HTML fragment
pub fn to_html(node: &VNode, options: &HtmlOptions) -> String {
    let mut ctx = Context::new(options);
    write_node(node, &mut ctx);
    ctx.get_output()
}

/// Standalone HTML page showing the canvas of `state`
pub fn render_document(state: &EditorState, renderer: &CanvasRenderer, options: &HtmlOptions) -> String {
    let canvas = renderer.render(state);
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(&options.title)));
    ctx.add_line("<style>body { margin: 0; background: #e5e7eb; font-family: system-ui, sans-serif; }</style>");
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    write_node(&canvas, &mut ctx);
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

fn write_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Text { content } => ctx.add_line(&escape_html(content)),

        VNode::Element {
            tag,
            attributes,
            styles,
            children,
            ..
        } => {
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(&format!("<{}", tag));

            for (name, value) in attributes {
                ctx.add(&format!(" {}=\"{}\"", name, escape_html(value)));
            }

            if !styles.is_empty() {
                let inline: Vec<String> = styles
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect();
                ctx.add(&format!(" style=\"{}\"", escape_html(&inline.join("; "))));
            }

            ctx.add(">");

            // Single text child stays on one line
            if let [VNode::Text { content }] = children.as_slice() {
                ctx.add(&escape_html(content));
            } else if !children.is_empty() {
                if ctx.options.pretty {
                    ctx.add("\n");
                }
                ctx.indent();
                for child in children {
                    write_node(child, ctx);
                }
                ctx.dedent();
                if ctx.options.pretty {
                    ctx.add_indent();
                }
            }

            ctx.add(&format!("</{}>", tag));
            if ctx.options.pretty {
                ctx.add("\n");
            }
        }
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockup_editor::{Element, ElementType, Forest, MockupElement};

    #[test]
    fn test_fragment() {
        let node = VNode::element("span")
            .with_attr("class", "a")
            .with_style("color", "red")
            .with_child(VNode::text("<hi>"));

        assert_eq!(
            to_html(&node, &HtmlOptions::default()),
            "<span class=\"a\" style=\"color: red\">&lt;hi&gt;</span>\n"
        );
    }

    #[test]
    fn test_compact_output_has_no_newlines() {
        let node = VNode::element("div")
            .with_child(VNode::element("div"))
            .with_child(VNode::element("div"));
        let options = HtmlOptions {
            pretty: false,
            ..Default::default()
        };

        assert_eq!(to_html(&node, &options), "<div><div></div><div></div></div>");
    }

    #[test]
    fn test_document() {
        let state = EditorState::new(Forest::from_elements(vec![MockupElement::leaf(
            Element::with_defaults("title", ElementType::Text, 1),
        )]));

        let html = render_document(&state, &CanvasRenderer::default(), &HtmlOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Mockup</title>"));
        assert!(html.contains("data-element-id=\"title\""));
        assert!(html.contains("New Text"));
        assert!(html.contains("transform: scale(1)"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
