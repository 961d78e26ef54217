//! Plain text call tree for terminal output.

use crate::parser::schema::Trace;
use crate::utils::config::{MAX_RENDER_DEPTH, PARAM_SEPARATOR};

/// Longest params string shown before truncation
const MAX_PARAMS_WIDTH: usize = 60;

/// Render the first `max_lines` calls as an indented tree
pub fn generate_text_summary(trace: &Trace, max_lines: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "  Xdebug {} (format {}), started {}",
        trace.version, trace.format, trace.start_time
    ));
    lines.push(format!(
        "  {} calls, max depth {}",
        trace.len(),
        trace.max_depth()
    ));
    lines.push(String::new());

    for (id, call) in trace.calls_in_order().take(max_lines) {
        let indent = "  ".repeat(call.depth.clamp(0, MAX_RENDER_DEPTH) as usize);
        let params = truncate(&call.params_joined(PARAM_SEPARATOR), MAX_PARAMS_WIDTH);
        let ret = call
            .ret
            .as_deref()
            .map(|r| format!(" → {}", r))
            .unwrap_or_default();

        lines.push(format!(
            "{:>6} {}{}({}){}  [{:.6}s, {:+} B] {}",
            id,
            indent,
            call.name,
            params,
            ret,
            call.time_diff,
            call.memory_diff,
            call.location()
        ));
    }

    if trace.len() > max_lines {
        lines.push(String::new());
        lines.push(format!(
            "   (Showing first {} of {} calls)",
            max_lines,
            trace.len()
        ));
    }

    lines.join("\n")
}

/// Truncate on a char boundary, marking the cut with an ellipsis
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(truncate("abcdefghij", 6), "abc...");
        assert_eq!(truncate("ééééé", 4), "é...");
    }
}
