use crate::domain::Selection;
use crate::error::{EditorError, Result};

/// Inline formatting operations applied to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatOp {
    Bold,
    Italic,
    Strikethrough,
    Code,
    Heading,
}

impl FormatOp {
    /// Opening delimiter inserted before the selected text.
    pub fn opening(&self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "*",
            Self::Strikethrough => "~~",
            Self::Code => "`",
            Self::Heading => "## ",
        }
    }

    /// Closing delimiter inserted after the selected text. Heading is
    /// prefix-only.
    pub fn closing(&self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "*",
            Self::Strikethrough => "~~",
            Self::Code => "`",
            Self::Heading => "",
        }
    }

    pub fn all() -> &'static [FormatOp] {
        &[
            Self::Bold,
            Self::Italic,
            Self::Strikethrough,
            Self::Code,
            Self::Heading,
        ]
    }
}

/// Wrap the selected span of `text` in the operation's delimiters.
///
/// Returns the new text and the new (collapsed) selection. With a non-empty
/// selection the caret lands immediately after the wrapped span. With a
/// caret (empty selection) it lands just after the opening delimiter, i.e.
/// between `**` and `**` for bold, so the user can type the to-be-formatted
/// word straight away; for heading that is the position after the `"## "`
/// marker.
///
/// Offsets that fall outside the text or inside a multi-byte character are
/// rejected; the buffer is never spliced at a non-boundary.
pub fn apply_format(text: &str, selection: Selection, op: FormatOp) -> Result<(String, Selection)> {
    if !selection.is_valid_for(text) {
        return Err(EditorError::InvalidSelection {
            start: selection.start,
            end: selection.end,
            len: text.len(),
        });
    }

    let selected = &text[selection.start..selection.end];
    let wrapped = format!("{}{}{}", op.opening(), selected, op.closing());

    let mut new_text = String::with_capacity(text.len() + wrapped.len());
    new_text.push_str(&text[..selection.start]);
    new_text.push_str(&wrapped);
    new_text.push_str(&text[selection.end..]);

    let caret = if selected.is_empty() {
        selection.start + op.opening().len()
    } else {
        selection.start + wrapped.len()
    };

    Ok((new_text, Selection::caret(caret)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(text: &str, start: usize, end: usize, op: FormatOp) -> (String, Selection) {
        apply_format(text, Selection::new(start, end), op).unwrap()
    }

    #[test]
    fn test_bold_selection() {
        let (text, sel) = fmt("make this bold please", 5, 9, FormatOp::Bold);
        assert_eq!(text, "make **this** bold please");
        assert_eq!(sel, Selection::caret(5 + "**this**".len()));
    }

    #[test]
    fn test_italic_selection() {
        let (text, sel) = fmt("an important word", 3, 12, FormatOp::Italic);
        assert_eq!(text, "an *important* word");
        assert_eq!(sel, Selection::caret(14));
    }

    #[test]
    fn test_strikethrough_selection() {
        let (text, sel) = fmt("old text", 0, 3, FormatOp::Strikethrough);
        assert_eq!(text, "~~old~~ text");
        assert_eq!(sel, Selection::caret(7));
    }

    #[test]
    fn test_code_selection() {
        let (text, sel) = fmt("call foo() now", 5, 10, FormatOp::Code);
        assert_eq!(text, "call `foo()` now");
        assert_eq!(sel, Selection::caret(12));
    }

    #[test]
    fn test_heading_is_prefix_only() {
        let (text, sel) = fmt("Title", 0, 5, FormatOp::Heading);
        assert_eq!(text, "## Title");
        assert_eq!(sel, Selection::caret(8));
    }

    #[test]
    fn test_empty_selection_bold_places_caret_between_markers() {
        let (text, sel) = fmt("hello world", 6, 6, FormatOp::Bold);
        assert_eq!(text, "hello ****world");
        assert_eq!(sel, Selection::caret(8));
    }

    #[test]
    fn test_empty_selection_italic() {
        let (text, sel) = fmt("ab", 1, 1, FormatOp::Italic);
        assert_eq!(text, "a**b");
        assert_eq!(sel, Selection::caret(2));
    }

    #[test]
    fn test_empty_selection_code() {
        let (text, sel) = fmt("", 0, 0, FormatOp::Code);
        assert_eq!(text, "``");
        assert_eq!(sel, Selection::caret(1));
    }

    #[test]
    fn test_empty_selection_heading_caret_after_marker() {
        let (text, sel) = fmt("line", 0, 0, FormatOp::Heading);
        assert_eq!(text, "## line");
        assert_eq!(sel, Selection::caret(3));
    }

    #[test]
    fn test_wrap_spans_only_selection() {
        let original = "# Hello\n\nWelcome to Markdown Editor! 🚀\n\nmore";
        let start = original.find("Welcome").unwrap();
        let end = start + "Welcome to Markdown Editor! 🚀".len();
        let (text, _) = fmt(original, start, end, FormatOp::Bold);
        assert_eq!(
            text,
            "# Hello\n\n**Welcome to Markdown Editor! 🚀**\n\nmore"
        );
    }

    #[test]
    fn test_unicode_selection() {
        let text = "naïve café";
        let start = text.find("café").unwrap();
        let (out, sel) = fmt(text, start, text.len(), FormatOp::Bold);
        assert_eq!(out, "naïve **café**");
        assert_eq!(sel, Selection::caret(out.len()));
    }

    #[test]
    fn test_selection_out_of_range_is_rejected() {
        let err = apply_format("abc", Selection::new(1, 9), FormatOp::Bold).unwrap_err();
        assert!(matches!(
            err,
            EditorError::InvalidSelection { start: 1, end: 9, len: 3 }
        ));
    }

    #[test]
    fn test_selection_inside_char_is_rejected() {
        // offset 2 splits the 3-byte €
        let err = apply_format("a€b", Selection::new(2, 4), FormatOp::Code).unwrap_err();
        assert!(matches!(err, EditorError::InvalidSelection { .. }));
    }

    #[test]
    fn test_caret_offset_matches_opening_len_for_every_op() {
        for op in FormatOp::all() {
            let (_, sel) = fmt("xy", 1, 1, *op);
            assert_eq!(sel, Selection::caret(1 + op.opening().len()));
        }
    }
}
