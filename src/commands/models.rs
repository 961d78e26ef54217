use crate::parser::ParseOptions;
use crate::render::HtmlConfig;
use std::path::{Path, PathBuf};

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Trace file to read
    pub input: PathBuf,

    /// Output path for the HTML document
    pub output_html: PathBuf,

    /// Output path for a JSON export (optional)
    pub output_json: Option<PathBuf>,

    /// HTML renderer configuration
    pub html_config: HtmlConfig,

    /// Header handling and other parse options
    pub parse_options: ParseOptions,

    /// Print text call tree to stdout
    pub print_summary: bool,

    /// Number of calls shown in the text summary
    pub summary_lines: usize,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_html: PathBuf::new(),
            output_json: None,
            html_config: HtmlConfig::default(),
            parse_options: ParseOptions::default(),
            print_summary: false,
            summary_lines: 50,
        }
    }
}

/// HTML path used when none is given: the trace path with `.html` appended
pub fn default_html_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(".html");
    PathBuf::from(path)
}
