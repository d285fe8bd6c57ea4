// src/ports/html.rs
use crate::domain::Note;
use crate::util::text::importance_stars;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

#[derive(Debug)]
pub struct HtmlPresenter {
    title: String,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self::with_title("Study Notes")
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn render_note(&self, note: &Note) -> String {
        let lines: String = note
            .content
            .iter()
            .map(|line| format!("<li>{}</li>", encode_text(line)))
            .collect();
        let tags: String = note
            .tags
            .iter()
            .map(|tag| format!(r#"<span class="tag">{}</span>"#, encode_text(tag)))
            .chain(
                note.custom_tags()
                    .iter()
                    .map(|tag| format!(r#"<span class="tag custom">{}</span>"#, encode_text(tag))),
            )
            .collect();
        let star = if note.is_starred() { r#"<span class="starred">★</span> "# } else { "" };

        format!(
            r#"<section class="note" id="{id}">
    <h2>{star}{title}</h2>
    <div class="importance" title="importance {importance}">{stars}</div>
    <ul>{lines}</ul>
    <div class="tags">{tags}</div>
</section>"#,
            id = encode_double_quoted_attribute(&note.section_id),
            star = star,
            title = encode_text(&note.section_title),
            importance = note.importance,
            stars = importance_stars(note.importance),
            lines = lines,
            tags = if tags.is_empty() {
                "No tags".to_string()
            } else {
                tags
            },
        )
    }

    /// Full HTML document with one section per note, in the given order.
    pub fn render(&self, notes: &[Note]) -> String {
        let body: Vec<String> = notes.iter().map(|n| self.render_note(n)).collect();

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .note {{
            background: white;
            border-radius: 8px;
            padding: 1.5rem 2rem;
            margin-bottom: 1.5rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .importance {{
            color: #e0a800;
        }}
        .starred {{
            color: #e0a800;
        }}
        .tag {{
            display: inline-block;
            background: #e9ecef;
            padding: 2px 8px;
            border-radius: 4px;
            margin-right: 4px;
            font-size: 0.8em;
        }}
        .tag.custom {{
            background: #d4edda;
        }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <p class="count">{count} notes</p>
{body}
</body>
</html>"#,
            title = encode_text(&self.title),
            count = notes.len(),
            body = body.join("\n"),
        )
    }
}

impl Default for HtmlPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<b>bold</b>", "&lt;b&gt;bold&lt;/b&gt;")]
    #[case("Salt & pepper", "Salt &amp; pepper")]
    fn given_markup_in_content_when_rendering_then_escapes(#[case] input: &str, #[case] expected: &str) {
        let presenter = HtmlPresenter::new();
        let note = Note::new("a", "A").with_content([input]);

        let html = presenter.render_note(&note);

        assert!(html.contains(expected));
    }

    #[test]
    fn given_tagged_starred_note_when_rendering_then_shows_tags_and_star() {
        let presenter = HtmlPresenter::new();
        let note = Note::new("a", "Cells")
            .with_importance(3)
            .with_tags(["Definition"])
            .with_custom_tags(["exam"])
            .with_starred(true);

        let html = presenter.render_note(&note);

        assert!(html.contains(r#"<span class="tag">Definition</span>"#));
        assert!(html.contains(r#"<span class="tag custom">exam</span>"#));
        assert!(html.contains("★★★☆☆"));
        assert!(html.contains(r#"class="starred""#));
    }

    #[test]
    fn given_quote_in_section_id_when_rendering_then_attribute_stays_closed() {
        let note = Note::new(r#"x" onmouseover="alert(1)"#, "A");

        let html = HtmlPresenter::new().render_note(&note);

        assert!(html.contains(r#"id="x&quot; onmouseover=&quot;alert(1)""#));
        assert!(!html.contains(r#"onmouseover="alert"#));
    }

    #[test]
    fn given_untagged_note_when_rendering_then_says_no_tags() {
        let html = HtmlPresenter::new().render_note(&Note::new("a", "A"));

        assert!(html.contains("No tags"));
    }

    #[test]
    fn given_notes_when_rendering_document_then_includes_every_section() {
        let notes = vec![Note::new("a", "Alpha"), Note::new("b", "Beta")];

        let html = HtmlPresenter::with_title("Biology").render(&notes);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Biology</title>"));
        assert!(html.contains(r#"id="a""#));
        assert!(html.contains(r#"id="b""#));
        assert!(html.contains("2 notes"));
    }
}
