use chatmark_core::{RenderOptions, RenderOutput, render_with_options};

const BASE_CSS: &str = include_str!("../assets/chatmark.css");

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Theme {
    Auto,
    Light,
    Dark,
}

const LIGHT_VARS: &[(&str, &str)] = &[
    ("--chatmark-page-bg", "#efeae2"),
    ("--chatmark-bubble-bg", "#ffffff"),
    ("--chatmark-fg", "#111b21"),
    ("--chatmark-muted", "#54656f"),
    ("--chatmark-quote-bg", "#f5f6f6"),
    ("--chatmark-quote-border", "#25d366"),
    ("--chatmark-code-bg", "#e9edef"),
    ("--chatmark-code-fg", "#3b4a54"),
];

const DARK_VARS: &[(&str, &str)] = &[
    ("--chatmark-page-bg", "#0b141a"),
    ("--chatmark-bubble-bg", "#202c33"),
    ("--chatmark-fg", "#e9edef"),
    ("--chatmark-muted", "#8696a0"),
    ("--chatmark-quote-bg", "#1d282f"),
    ("--chatmark-quote-border", "#06cf9c"),
    ("--chatmark-code-bg", "#111b21"),
    ("--chatmark-code-fg", "#d1d7db"),
];

/// Wraps rendered message fragments into standalone preview pages.
#[derive(Debug, Clone)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn stylesheet(&self) -> String {
        let mut out = String::new();
        match self.theme {
            Theme::Auto => {
                push_root(&mut out, LIGHT_VARS);
                out.push_str("@media (prefers-color-scheme: dark) {\n");
                push_root(&mut out, DARK_VARS);
                out.push_str("}\n");
            }
            Theme::Light => push_root(&mut out, LIGHT_VARS),
            Theme::Dark => push_root(&mut out, DARK_VARS),
        }
        out.push_str(BASE_CSS);
        out
    }

    /// Places an already rendered fragment inside a message bubble on an HTML page.
    pub fn embed_html(&self, html: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\" />\n  <style>\n{}\n  </style>\n</head>\n<body>\n<div class=\"chatmark-message\">{}</div>\n</body>\n</html>\n",
            self.stylesheet(),
            html
        )
    }

    /// Renders a raw message and embeds it in a preview page.
    pub fn render_page(&self, source: &str, options: &RenderOptions) -> RenderOutput {
        let rendered = render_with_options(source, options);
        RenderOutput {
            html: self.embed_html(&rendered.html),
            truncated: rendered.truncated,
        }
    }
}

fn push_root(out: &mut String, vars: &[(&str, &str)]) {
    out.push_str(":root {\n");
    for (key, value) in vars {
        out.push_str(&format!("  {}: {};\n", key, value));
    }
    out.push_str("}\n");
}
