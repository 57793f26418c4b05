/// The default buffer shown on a fresh start, before any session restore.
pub const WELCOME_TEXT: &str = r#"# Welcome to Markdown Editor! 🚀

## Features

- **Live Preview**: See your markdown code instantly
- **Syntax Highlighting**: Code blocks with colorization
- **GitHub Flavored Markdown**: Tables, strikethrough text and more
- **Responsive Design**: Mobile-friendly interface

## Code Example

```javascript
function sayHello(name) {
  return `Hello, ${name}!`;
}

console.log(sayHello('World'));
```

## Table Example

| Feature | Status |
|---------|--------|
| Editor | ✅ Ready |
| Preview | ✅ Ready |
| Save | 🔄 In Progress |

## To-Do List

- [x] Basic editor
- [x] Markdown preview
- [ ] File saving
- [ ] Theme selection
- [ ] Export feature

> **Tip**: Write your markdown code in the left panel, see the result in the right panel!

**Bold text** and *italic text* examples.

[This is a link](https://example.com) and this is inline code: `const x = 5;`

---

Start using your markdown editor! 🎉"#;

pub const DEFAULT_FILE_NAME: &str = "untitled.md";

/// The editable buffer and its display name.
///
/// `text` is the single source of truth for the document content; it is
/// mutated only through the editor operations. `file_name` is rewritten at
/// export time (`.md` -> `.html`/`.txt`), never in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub file_name: String,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            text: WELCOME_TEXT.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl Document {
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// Count of Unicode scalar values in the buffer.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whitespace-separated words in the buffer.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Number of lines, counting the line after a trailing newline.
    /// An empty buffer has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.text.matches('\n').count() + 1
    }
}

/// A half-open byte range into the document text, `start <= end`.
///
/// Always passed into and returned from formatting operations explicitly,
/// never read from ambient focus state. A collapsed selection
/// (`start == end`) is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A collapsed selection at `pos`.
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether both offsets index valid char boundaries of `text`.
    pub fn is_valid_for(&self, text: &str) -> bool {
        self.start <= self.end
            && self.end <= text.len()
            && text.is_char_boundary(self.start)
            && text.is_char_boundary(self.end)
    }

    /// Clamp both offsets into `text`, snapping down to char boundaries.
    ///
    /// Used after every mutation so stored offsets are always valid against
    /// the *new* text length.
    pub fn clamped_to(&self, text: &str) -> Self {
        let start = snap_to_boundary(text, self.start.min(self.end));
        let end = snap_to_boundary(text, self.start.max(self.end));
        Self { start, end }
    }
}

fn snap_to_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document() {
        let doc = Document::default();
        assert!(doc.text.starts_with("# Welcome to Markdown Editor! 🚀"));
        assert_eq!(doc.file_name, "untitled.md");
    }

    #[test]
    fn test_empty_document_counts() {
        let doc = Document::empty();
        assert_eq!(doc.char_count(), 0);
        assert_eq!(doc.word_count(), 0);
        assert_eq!(doc.line_count(), 1);
    }

    #[test]
    fn test_counts_unicode() {
        let doc = Document {
            text: "héllo wörld\nsecond line".to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        };
        assert_eq!(doc.char_count(), 23);
        assert_eq!(doc.word_count(), 4);
        assert_eq!(doc.line_count(), 2);
    }

    #[test]
    fn test_selection_validity() {
        let text = "a€b"; // € is 3 bytes at offset 1
        assert!(Selection::new(0, 1).is_valid_for(text));
        assert!(Selection::new(1, 4).is_valid_for(text));
        assert!(!Selection::new(1, 2).is_valid_for(text));
        assert!(!Selection::new(2, 3).is_valid_for(text));
        assert!(!Selection::new(3, 1).is_valid_for(text));
        assert!(!Selection::new(0, 6).is_valid_for(text));
    }

    #[test]
    fn test_clamp_past_end() {
        let sel = Selection::new(10, 50).clamped_to("hello");
        assert_eq!(sel, Selection::new(5, 5));
    }

    #[test]
    fn test_clamp_snaps_to_char_boundary() {
        let text = "a€b";
        let sel = Selection::new(2, 3).clamped_to(text);
        assert_eq!(sel, Selection::new(1, 1));
    }

    #[test]
    fn test_clamp_reorders_inverted_range() {
        let sel = Selection::new(4, 2).clamped_to("hello");
        assert_eq!(sel, Selection::new(2, 4));
    }

    #[test]
    fn test_caret() {
        let sel = Selection::caret(3);
        assert!(sel.is_empty());
        assert_eq!(sel.start, 3);
    }
}
