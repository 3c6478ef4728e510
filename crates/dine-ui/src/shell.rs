//! Document shell.

use crate::html::{escape_html, js_string};

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Link and style tags.
    pub links: Vec<String>,
    /// wasm-bindgen `--target web` bundles initialised at the end of the head.
    pub modules: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    /// Load and initialise a wasm-bindgen web bundle by URL.
    pub fn with_module_loader(mut self, src: &str) -> Self {
        self.modules.push(src.to_string());
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            html.push('\n');
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        for src in &self.modules {
            html.push_str(&format!(
                "<script type=\"module\">import init from {};init();</script>\n",
                js_string(src)
            ));
        }

        html
    }
}

/// Full-document template around a page body.
#[derive(Debug, Clone)]
pub struct Shell {
    pub head: HeadContent,
    /// Classes on the `<body>` element.
    pub body_class: String,
}

impl Shell {
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            body_class: String::new(),
        }
    }

    pub fn with_body_class(mut self, class: impl Into<String>) -> Self {
        self.body_class = class.into();
        self
    }

    /// Wrap `body` in a complete HTML document.
    pub fn render(&self, body: &str) -> String {
        let body_open = if self.body_class.is_empty() {
            "<body>".to_string()
        } else {
            format!(r#"<body class="{}">"#, escape_html(&self.body_class))
        };

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{head}</head>\n{body_open}\n{body}\n</body>\n</html>",
            head = self.head.render(),
            body_open = body_open,
            body = body
        )
    }
}
