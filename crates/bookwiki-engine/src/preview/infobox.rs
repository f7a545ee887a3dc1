use html_escape::encode_text;

use crate::models::InfoboxEntry;

/// Renders infobox entries as an HTML key/value table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoboxRenderer {
    title: Option<String>,
}

impl InfoboxRenderer {
    pub const DEFAULT_TITLE: &'static str = "Dossier";

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    /// Renderer that emits the table without a caption
    pub fn untitled() -> Self {
        Self { title: None }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Render the entries. Keys and values are HTML-escaped; an empty list
    /// gives an empty table body.
    pub fn render(&self, entries: &[InfoboxEntry]) -> String {
        let mut html = String::from("<div class=\"infobox\">\n");
        if let Some(title) = &self.title {
            html.push_str(&format!(
                "<div class=\"infobox-title\">{}</div>\n",
                encode_text(title)
            ));
        }
        html.push_str("<table class=\"infobox-table\">\n<tbody>\n");
        for entry in entries {
            html.push_str(&format!(
                "<tr><th>{}</th><td>{}</td></tr>\n",
                encode_text(&entry.key),
                encode_text(&entry.value)
            ));
        }
        html.push_str("</tbody>\n</table>\n</div>\n");
        html
    }
}

impl Default for InfoboxRenderer {
    fn default() -> Self {
        Self::with_title(Self::DEFAULT_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rows_in_order() {
        let html = InfoboxRenderer::untitled().render(&[
            InfoboxEntry::new("Имя", "Огаро"),
            InfoboxEntry::new("Статус", "Жив"),
        ]);
        insta::assert_snapshot!(html.trim_end(), @r#"
        <div class="infobox">
        <table class="infobox-table">
        <tbody>
        <tr><th>Имя</th><td>Огаро</td></tr>
        <tr><th>Статус</th><td>Жив</td></tr>
        </tbody>
        </table>
        </div>
        "#);
    }

    #[test]
    fn empty_entries_render_empty_body() {
        let html = InfoboxRenderer::untitled().render(&[]);
        assert!(html.contains("<tbody>\n</tbody>"));
        assert!(!html.contains("<tr>"));
    }

    #[test]
    fn default_renderer_has_title() {
        let html = InfoboxRenderer::default().render(&[]);
        assert!(html.contains("<div class=\"infobox-title\">Dossier</div>"));
    }

    #[test]
    fn markup_in_entries_is_escaped() {
        let html = InfoboxRenderer::with_title("<b>T</b>")
            .render(&[InfoboxEntry::new("<script>", "a & b</td>")]);
        assert!(html.contains("&lt;b&gt;T&lt;/b&gt;"));
        assert!(html.contains("<th>&lt;script&gt;</th>"));
        assert!(html.contains("<td>a &amp; b&lt;/td&gt;</td>"));
    }
}
