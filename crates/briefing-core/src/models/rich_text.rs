use serde::{Deserialize, Serialize};

/// Text carrying a small inline markup subset:
///
/// - `<b>…</b>` → bold run
/// - `<br/>` (also `<br>`, `<br />`) → line break
/// - `<a href='…'>…</a>` → hyperlink run (single or double quotes)
/// - `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&#39;` → the literal character
///
/// Any other `<` is literal text, so `MTTD <24h` needs no escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(String);

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
    pub link: Option<String>,
}

/// One hard line of rich text (between `<br/>` breaks).
pub type Line = Vec<Span>;

impl RichText {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn markup(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse into hard lines of styled spans.
    ///
    /// Consecutive breaks yield empty lines; a trailing break does not add
    /// a final empty line. Adjacent spans with the same style are merged.
    pub fn lines(&self) -> Vec<Line> {
        let mut lines = Vec::new();
        let mut current: Line = Vec::new();
        let mut bold = false;
        let mut link: Option<String> = None;
        let mut pending = String::new();
        let mut rest = self.0.as_str();

        let flush = |pending: &mut String, current: &mut Line, bold: bool, link: &Option<String>| {
            if pending.is_empty() {
                return;
            }
            let text = std::mem::take(pending);
            match current.last_mut() {
                Some(last) if last.bold == bold && last.link == *link => last.text.push_str(&text),
                _ => current.push(Span {
                    text,
                    bold,
                    link: link.clone(),
                }),
            }
        };

        while let Some(ch) = rest.chars().next() {
            if ch == '<' {
                if let Some((tag, after)) = parse_tag(rest) {
                    flush(&mut pending, &mut current, bold, &link);
                    match tag {
                        Tag::BoldOpen => bold = true,
                        Tag::BoldClose => bold = false,
                        Tag::Break => lines.push(std::mem::take(&mut current)),
                        Tag::LinkOpen(href) => link = Some(href),
                        Tag::LinkClose => link = None,
                    }
                    rest = after;
                    continue;
                }
            } else if ch == '&'
                && let Some((decoded, after)) = parse_entity(rest)
            {
                pending.push(decoded);
                rest = after;
                continue;
            }
            pending.push(ch);
            rest = &rest[ch.len_utf8()..];
        }

        flush(&mut pending, &mut current, bold, &link);
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    /// Markup stripped to plain text, one `\n` per line break.
    pub fn plain_text(&self) -> String {
        self.lines()
            .iter()
            .map(|line| line.iter().map(|s| s.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<&str> for RichText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

enum Tag {
    BoldOpen,
    BoldClose,
    Break,
    LinkOpen(String),
    LinkClose,
}

fn parse_tag(input: &str) -> Option<(Tag, &str)> {
    let fixed = [
        ("<b>", Tag::BoldOpen),
        ("</b>", Tag::BoldClose),
        ("<br/>", Tag::Break),
        ("<br />", Tag::Break),
        ("<br>", Tag::Break),
        ("</a>", Tag::LinkClose),
    ];
    for (literal, tag) in fixed {
        if let Some(after) = input.strip_prefix(literal) {
            return Some((tag, after));
        }
    }

    let after_open = input.strip_prefix("<a href=")?;
    let quote = after_open.chars().next().filter(|c| *c == '\'' || *c == '"')?;
    let value = &after_open[1..];
    let end = value.find(quote)?;
    let after = value[end + 1..].strip_prefix('>')?;
    Some((Tag::LinkOpen(value[..end].to_string()), after))
}

fn parse_entity(input: &str) -> Option<(char, &str)> {
    const ENTITIES: [(&str, char); 5] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#39;", '\''),
    ];
    ENTITIES
        .iter()
        .find_map(|(entity, ch)| input.strip_prefix(entity).map(|after| (*ch, after)))
}
