/// Infobox fence delimiters.
///
/// All knowledge of the ```` ```infobox ```` convention lives here so the
/// serializer and the preview rewriter agree on what an infobox looks like.
pub struct InfoboxFence;

impl InfoboxFence {
    pub const MARKER: &'static str = "```";
    pub const LANGUAGE: &'static str = "infobox";
    pub const OPEN: &'static str = "```infobox";
    pub const CLOSE: &'static str = "```";

    /// Whether a language tag names an infobox (case and surrounding whitespace ignored)
    pub fn is_infobox_language(tag: &str) -> bool {
        tag.trim().eq_ignore_ascii_case(Self::LANGUAGE)
    }

    /// Whether a line opens an infobox fence.
    ///
    /// Matches on prefix, so ```` ```infobox extra ```` and ```` ```infoboxes ````
    /// open an infobox too. The preview only rewrites an exact `infobox` tag
    /// (see [`Self::is_infobox_language`]) and shows those fences as code.
    pub fn opens(line: &str) -> bool {
        let Some(rest) = line.trim().strip_prefix(Self::MARKER) else {
            return false;
        };
        rest.trim_start()
            .get(..Self::LANGUAGE.len())
            .is_some_and(|tag| tag.eq_ignore_ascii_case(Self::LANGUAGE))
    }

    /// Whether a line closes an open infobox fence
    pub fn closes(line: &str) -> bool {
        line.trim() == Self::CLOSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_open_fence() {
        assert!(InfoboxFence::opens("```infobox"));
        assert!(InfoboxFence::opens("   ```infobox  "));
        assert!(InfoboxFence::opens("```INFOBOX"));
        assert!(InfoboxFence::opens("``` infobox"));
    }

    #[test]
    fn open_fence_is_a_prefix_match() {
        assert!(InfoboxFence::opens("```infobox extra"));
        assert!(InfoboxFence::opens("```infoboxes"));
        assert!(!InfoboxFence::is_infobox_language("infobox extra"));
        assert!(!InfoboxFence::is_infobox_language("infoboxes"));
    }

    #[test]
    fn other_fences_do_not_open() {
        assert!(!InfoboxFence::opens("```rust"));
        assert!(!InfoboxFence::opens("```"));
        assert!(!InfoboxFence::opens("````infobox"));
        assert!(!InfoboxFence::opens("infobox"));
        assert!(!InfoboxFence::opens("```инфо"));
    }

    #[test]
    fn close_fence_must_be_bare() {
        assert!(InfoboxFence::closes("```"));
        assert!(InfoboxFence::closes("  ```  "));
        assert!(!InfoboxFence::closes("```infobox"));
        assert!(!InfoboxFence::closes("````"));
    }

    #[test]
    fn language_match_ignores_case_and_whitespace() {
        assert!(InfoboxFence::is_infobox_language("infobox"));
        assert!(InfoboxFence::is_infobox_language("Infobox"));
        assert!(InfoboxFence::is_infobox_language(" infobox "));
        assert!(InfoboxFence::is_infobox_language("INFOBOX"));
        assert!(!InfoboxFence::is_infobox_language("info box"));
        assert!(!InfoboxFence::is_infobox_language("rust"));
        assert!(!InfoboxFence::is_infobox_language(""));
    }
}
