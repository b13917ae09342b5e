use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

use super::Highlighter;

fn info_regex() -> &'static Regex {
    static INFO: OnceLock<Regex> = OnceLock::new();
    INFO.get_or_init(|| Regex::new(r"^(\S*)\s*\{(.+?)\}\s*$").expect("Invalid code info regex"))
}

fn range_regex() -> &'static Regex {
    static RANGE: OnceLock<Regex> = OnceLock::new();
    RANGE.get_or_init(|| Regex::new(r"^(\d+)-(\d+)$").expect("Invalid line range regex"))
}

/// Set of 1-based line numbers from a `{2,4-6}` spec.
///
/// Ranges are stored as ranges so a huge `1-100000` spec costs nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSet(Vec<RangeInclusive<usize>>);

impl LineSet {
    /// Parse a comma separated list of line numbers and inclusive ranges.
    ///
    /// Parts that are not numbers are skipped. A part with trailing junk
    /// (`3x`) keeps its leading digits.
    pub fn parse(spec: &str) -> Self {
        let mut ranges = vec![];
        for part in spec.split(',').map(str::trim) {
            if let Some(caps) = range_regex().captures(part) {
                if let (Ok(start), Ok(end)) = (caps[1].parse::<usize>(), caps[2].parse::<usize>()) {
                    ranges.push(start..=end);
                }
                continue;
            }
            let digits_end = part
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(part.len());
            if let Ok(n) = part[..digits_end].parse::<usize>() {
                ranges.push(n..=n);
            }
        }
        Self(ranges)
    }

    pub fn contains(&self, line: usize) -> bool {
        self.0.iter().any(|r| r.contains(&line))
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|r| r.is_empty())
    }
}

/// A fenced block's info string split into language and line highlights.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeInfo {
    pub language: String,
    pub highlights: LineSet,
}

impl CodeInfo {
    /// Parse an info string such as `python {2,4-6}` or `rust`.
    ///
    /// Only the first word names the language; anything after it that is not
    /// a brace spec is ignored.
    pub fn parse(info: &str) -> Self {
        let info = info.trim();
        match info_regex().captures(info) {
            Some(caps) => Self {
                language: caps[1].to_string(),
                highlights: LineSet::parse(&caps[2]),
            },
            None => Self {
                language: info.split_whitespace().next().unwrap_or("").to_string(),
                highlights: LineSet::default(),
            },
        }
    }

    fn language_hint(&self) -> Option<&str> {
        Some(self.language.as_str()).filter(|l| !l.is_empty())
    }
}

/// Render one code block to HTML.
///
/// Diagram blocks become an inert container holding the escaped source for
/// the presentation layer to render. Everything else is highlighted and, if
/// the info string carries a line spec, wrapped line by line.
pub fn render_code_block(
    info: &str,
    code: &str,
    highlighter: &impl Highlighter,
    diagram_language: &str,
) -> String {
    let info = CodeInfo::parse(info);
    let code = code.strip_suffix('\n').unwrap_or(code);

    if info.language == diagram_language {
        return format!(
            "<div class=\"{diagram_language}\">{}</div>",
            html_escape::encode_double_quoted_attribute(code)
        );
    }

    let mut highlighted = highlighter.highlight(code, info.language_hint());
    if !info.highlights.is_empty() {
        highlighted = wrap_lines(&highlighted, &info.highlights);
    }

    let class = match info.language_hint() {
        Some(lang) => format!(
            "hljs language-{}",
            html_escape::encode_double_quoted_attribute(lang)
        ),
        None => "hljs".to_string(),
    };
    format!("<pre><code class=\"{class}\">{highlighted}</code></pre>")
}

fn wrap_lines(highlighted: &str, marked: &LineSet) -> String {
    highlighted
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            let extra = if marked.contains(i + 1) {
                " line-highlight"
            } else {
                ""
            };
            format!("<span class=\"code-line{extra}\">{line}</span>")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PlainHighlighter;
    use rstest::rstest;

    #[rstest]
    #[case("2,4-6", &[2, 4, 5, 6], &[1, 3, 7])]
    #[case(" 1 , 3 ", &[1, 3], &[2])]
    #[case("3x, nope, 8-9", &[3, 8, 9], &[4, 7, 10])]
    #[case("5-3", &[], &[3, 4, 5])]
    fn line_set_parsing(#[case] spec: &str, #[case] inside: &[usize], #[case] outside: &[usize]) {
        let set = LineSet::parse(spec);
        for n in inside {
            assert!(set.contains(*n), "{n} should be in {spec:?}");
        }
        for n in outside {
            assert!(!set.contains(*n), "{n} should not be in {spec:?}");
        }
    }

    #[test]
    fn empty_and_reversed_specs_are_empty() {
        assert!(LineSet::parse("").is_empty());
        assert!(LineSet::parse("9-1").is_empty());
        assert!(!LineSet::parse("1").is_empty());
    }

    #[test]
    fn info_with_line_spec() {
        let info = CodeInfo::parse("python {2,4-6}");
        assert_eq!(info.language, "python");
        assert!(info.highlights.contains(5));
    }

    #[test]
    fn info_spec_without_language() {
        let info = CodeInfo::parse("{1}");
        assert_eq!(info.language, "");
        assert!(info.highlights.contains(1));
    }

    #[test]
    fn info_plain_language_keeps_first_word() {
        assert_eq!(CodeInfo::parse("rust ignore").language, "rust");
        assert!(CodeInfo::parse("rust").highlights.is_empty());
    }

    #[test]
    fn highlighted_lines_are_marked_one_based() {
        let code = "l1\nl2\nl3\nl4\nl5\nl6\nl7\n";
        let html = render_code_block("python {2,4-6}", code, &PlainHighlighter, "mermaid");

        let marked: Vec<usize> = html
            .split('\n')
            .enumerate()
            .filter(|(_, line)| line.contains("line-highlight"))
            .map(|(i, _)| i + 1)
            .collect();
        assert_eq!(marked, vec![2, 4, 5, 6]);
        assert_eq!(html.matches("<span class=\"code-line").count(), 7);
        assert!(html.starts_with("<pre><code class=\"hljs language-python\">"));
    }

    #[test]
    fn plain_block_is_not_wrapped() {
        let html = render_code_block("", "a < b\n", &PlainHighlighter, "mermaid");
        assert_eq!(html, "<pre><code class=\"hljs\">a &lt; b</code></pre>");
    }

    #[test]
    fn diagram_block_is_escaped_container() {
        let html = render_code_block(
            "mermaid",
            "graph TD\n  A-->B[\"x\"]\n",
            &PlainHighlighter,
            "mermaid",
        );
        assert_eq!(
            html,
            "<div class=\"mermaid\">graph TD\n  A--&gt;B[&quot;x&quot;]</div>"
        );
    }
}
