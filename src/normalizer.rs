use regex::Regex;
use std::sync::OnceLock;

const BULLET_MARKERS: [char; 2] = ['-', '•'];
const INDENT_UNIT: &str = "  ";

fn bold_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"))
}

/// Reformat raw completion text into display-ready lines.
///
/// Bullet lines keep their marker and are re-indented in two-space units
/// (leading whitespace / 2, floored). Other lines are trimmed and lose
/// `**bold**` wrapping. Bare markers and blank lines are dropped.
pub fn normalize_summary(raw: &str) -> String {
    raw.lines()
        .filter_map(normalize_line)
        .collect::<Vec<String>>()
        .join("\n")
}

fn normalize_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || is_bare_marker(trimmed) {
        return None;
    }

    if trimmed.starts_with(BULLET_MARKERS) {
        let indent_level = leading_whitespace(line) / 2;
        return Some(format!("{}{}", INDENT_UNIT.repeat(indent_level), trimmed));
    }

    let stripped = bold_pattern().replace_all(trimmed, "$1");
    let stripped = stripped.trim();
    if stripped.is_empty() || is_bare_marker(stripped) {
        None
    } else {
        Some(stripped.to_string())
    }
}

fn is_bare_marker(trimmed: &str) -> bool {
    let mut chars = trimmed.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if BULLET_MARKERS.contains(&c))
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
