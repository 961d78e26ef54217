//! HTML call tree rendering.
//!
//! Calls are walked in ascending id order and nesting is derived from the
//! depth of consecutive calls: a deeper call opens `<div class="d">`
//! containers, a shallower one closes them. Ids are not guaranteed to be a
//! pre-order traversal, so the result approximates the real tree.

use crate::parser::schema::{CallRecord, Trace};
use crate::utils::config::{
    DEFAULT_SCRIPT, DEFAULT_STYLESHEET, DEFAULT_TITLE, MAX_RENDER_DEPTH, PARAM_SEPARATOR,
};
use log::{debug, info};

/// HTML renderer configuration
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    pub title: String,
    /// Stylesheet href, omitted when `None`
    pub stylesheet: Option<String>,
    /// Script src, omitted when `None`
    pub script: Option<String>,
    pub param_separator: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            stylesheet: Some(DEFAULT_STYLESHEET.to_string()),
            script: Some(DEFAULT_SCRIPT.to_string()),
            param_separator: PARAM_SEPARATOR.to_string(),
        }
    }
}

impl HtmlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_stylesheet(mut self, href: Option<String>) -> Self {
        self.stylesheet = href;
        self
    }

    pub fn with_script(mut self, src: Option<String>) -> Self {
        self.script = src;
        self
    }
}

/// Render a trace as HTML lines
///
/// **Public** - main entry point for HTML output
pub fn render_html(trace: &Trace, config: &HtmlConfig) -> Vec<String> {
    info!("Rendering {} calls as HTML", trace.len());

    let mut out = Vec::new();
    render_head(&mut out, trace, config);
    render_header_row(&mut out);

    let mut level = 0usize;
    for (_, call) in trace.calls_in_order() {
        let depth = call.depth.clamp(0, MAX_RENDER_DEPTH) as usize;

        if depth > level {
            for _ in level..depth {
                out.push(r#"<div class="d">"#.to_string());
            }
        } else {
            for _ in depth..level {
                out.push("</div>".to_string());
            }
        }
        level = depth;

        render_call(&mut out, call, config);
    }

    for _ in 0..level {
        out.push("</div>".to_string());
    }

    render_tail(&mut out, config);

    debug!("Rendered {} HTML lines", out.len());
    out
}

/// Render a trace as a single HTML document string
pub fn render_html_document(trace: &Trace, config: &HtmlConfig) -> String {
    let mut document = render_html(trace, config).join("\n");
    document.push('\n');
    document
}

fn render_head(out: &mut Vec<String>, trace: &Trace, config: &HtmlConfig) {
    out.push("<!DOCTYPE html>".to_string());
    out.push("<html>".to_string());
    out.push("<head>".to_string());
    out.push(r#"<meta charset="utf-8">"#.to_string());
    out.push(format!("<title>{}</title>", html_escape(&config.title)));
    if let Some(href) = &config.stylesheet {
        out.push(format!(
            r#"<link rel="stylesheet" href="{}" type="text/css">"#,
            html_escape(href)
        ));
    }
    out.push("</head>".to_string());
    out.push("<body>".to_string());
    out.push(format!(
        r#"<div class="trace-info">Xdebug {} | format {} | started {}</div>"#,
        html_escape(&trace.version),
        trace.format,
        trace.start_time
    ));
}

fn render_header_row(out: &mut Vec<String>) {
    out.push(r#"<div class="f header">"#.to_string());
    out.push(r#"<div class="func">Function Call</div>"#.to_string());
    out.push(r#"<div class="data">"#.to_string());
    out.push(r#"<span class="file">File:Line</span>"#.to_string());
    out.push(r#"<span class="timediff">ΔTime</span>"#.to_string());
    out.push(r#"<span class="memorydiff">ΔMemory</span>"#.to_string());
    out.push(r#"<span class="time">Time</span>"#.to_string());
    out.push("</div>".to_string());
    out.push("</div>".to_string());
}

fn render_call(out: &mut Vec<String>, call: &CallRecord, config: &HtmlConfig) {
    let class = if call.is_internal() { "f i" } else { "f" };
    out.push(format!(r#"<div class="{}">"#, class));

    out.push(r#"<div class="func">"#.to_string());
    out.push(format!(r#"<span class="name">{}</span>"#, html_escape(&call.name)));
    out.push(format!(
        r#"<span class="params short">{}</span>"#,
        html_escape(&call.params_joined(&config.param_separator))
    ));
    if let Some(ret) = call.ret.as_deref().filter(|r| !r.is_empty()) {
        out.push(format!(
            r#"→ <span class="return short">{}</span>"#,
            html_escape(ret)
        ));
    }
    out.push("</div>".to_string());

    let location = html_escape(&call.location());
    out.push(r#"<div class="data">"#.to_string());
    out.push(format!(
        r#"<span class="file" title="{}">{}</span>"#,
        location, location
    ));
    out.push(format!(r#"<span class="timediff">{:.6}</span>"#, call.time_diff));
    out.push(format!(r#"<span class="memorydiff">{}</span>"#, call.memory_diff));
    out.push(format!(r#"<span class="time">{:.6}</span>"#, call.time_enter));
    out.push("</div>".to_string());

    out.push("</div>".to_string());
}

fn render_tail(out: &mut Vec<String>, config: &HtmlConfig) {
    if let Some(src) = &config.script {
        out.push(format!(
            r#"<script type="text/javascript" src="{}"></script>"#,
            html_escape(src)
        ));
    }
    out.push("</body>".to_string());
    out.push("</html>".to_string());
}

/// Escape text for HTML element content and attribute values
pub fn html_escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
