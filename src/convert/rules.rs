//! The ordered text-rewrite rules.
//!
//! Each rule swaps one piece of editor HTML for its Markdown spelling.
//! The rules run over the whole string, one after another, in exactly the
//! order listed here. The order is load-bearing: checkbox items must be
//! consumed before the bare `<li>` rule, and fenced code blocks before the
//! inline `<code>` rule. Tags that no rule matches are left in place.

use once_cell::sync::Lazy;
use regex::Regex;

/// One rewrite: every match of `pattern` becomes `replacement`.
struct Rewrite {
    pattern: Regex,
    replacement: &'static str,
}

impl Rewrite {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }
}

static REWRITES: Lazy<Vec<Rewrite>> = Lazy::new(|| {
    vec![
        // Headings close with a newline so following text starts a new line.
        Rewrite::new("<h1>", "# "),
        Rewrite::new("</h1>", "\n"),
        Rewrite::new("<h2>", "## "),
        Rewrite::new("</h2>", "\n"),
        Rewrite::new("<h3>", "### "),
        Rewrite::new("</h3>", "\n"),
        // Inline emphasis pairs map to symmetric markers.
        Rewrite::new("<strong>", "**"),
        Rewrite::new("</strong>", "**"),
        Rewrite::new("<em>", "*"),
        Rewrite::new("</em>", "*"),
        Rewrite::new("<u>", "__"),
        Rewrite::new("</u>", "__"),
        Rewrite::new("<s>", "~~"),
        Rewrite::new("</s>", "~~"),
        // List containers vanish; the attribute form covers data-checked.
        Rewrite::new("<ul[^>]*>", ""),
        Rewrite::new("</ul>", "\n"),
        Rewrite::new("<ol[^>]*>", ""),
        Rewrite::new("</ol>", "\n"),
        // Checkbox items carry the marker injected by the DOM pass. The
        // trailing space is part of the match so the output keeps exactly
        // one space between marker and text. Must precede the bare li rule.
        Rewrite::new(r"<li>\[x\] ", "- [x] "),
        Rewrite::new(r"<li>\[ \] ", "- [ ] "),
        // Every list item renders as a dash bullet, ordered lists included.
        Rewrite::new("<li>", "- "),
        Rewrite::new("</li>", "\n"),
        Rewrite::new("<p>", ""),
        Rewrite::new("</p>", "\n"),
        Rewrite::new("<br>", "\n"),
        // Fenced block first, while the inner <code> pair is still intact.
        Rewrite::new("(?s)<pre><code>(.*?)</code></pre>", "```\n$1\n```\n"),
        Rewrite::new("<code>", "`"),
        Rewrite::new("</code>", "`"),
        Rewrite::new(r#"<a href="(.*?)">(.*?)</a>"#, "[$2]($1)"),
        Rewrite::new(r#"<img src="(.*?)".*?>"#, "![]($1)"),
        Rewrite::new("<table>", "\n"),
        Rewrite::new("</table>", "\n"),
        Rewrite::new("<tr>", "|"),
        Rewrite::new("</tr>", "|\n"),
        Rewrite::new("<td>", " "),
        Rewrite::new("</td>", " |"),
        Rewrite::new("<th>", " "),
        Rewrite::new("</th>", " |"),
    ]
});

/// Apply every rewrite in order and return the resulting text.
pub(super) fn apply(html: &str) -> String {
    REWRITES.iter().fold(html.to_owned(), |text, rewrite| {
        rewrite
            .pattern
            .replace_all(&text, rewrite.replacement)
            .into_owned()
    })
}
