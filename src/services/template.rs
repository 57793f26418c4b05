use crate::error::{EditorError, Result};

/// The fixed catalog of insertable Markdown blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKey {
    Table,
    CodeBlock,
    Checklist,
    Quote,
    Badge,
    Link,
    Image,
    Math,
}

impl TemplateKey {
    /// The string name used by callers (toolbar buttons, persistence).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::CodeBlock => "codeblock",
            Self::Checklist => "checklist",
            Self::Quote => "quote",
            Self::Badge => "badge",
            Self::Link => "link",
            Self::Image => "image",
            Self::Math => "math",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "table" => Some(Self::Table),
            "codeblock" => Some(Self::CodeBlock),
            "checklist" => Some(Self::Checklist),
            "quote" => Some(Self::Quote),
            "badge" => Some(Self::Badge),
            "link" => Some(Self::Link),
            "image" => Some(Self::Image),
            "math" => Some(Self::Math),
            _ => None,
        }
    }

    /// The static Markdown snippet for this template.
    pub fn snippet(&self) -> &'static str {
        match self {
            Self::Table => {
                "| Header 1 | Header 2 | Header 3 |\n\
                 |----------|----------|----------|\n\
                 | Cell 1   | Cell 2   | Cell 3   |\n\
                 | Cell 4   | Cell 5   | Cell 6   |"
            }
            Self::CodeBlock => {
                "```javascript\n\
                 // Code block example\n\
                 function hello() {\n  \
                 console.log('Hello World!');\n\
                 }\n\
                 ```"
            }
            Self::Checklist => {
                "- [x] Completed task\n\
                 - [ ] Todo task\n\
                 - [ ] Another task"
            }
            Self::Quote => {
                "> This is a quote example.\n\
                 > It can have multiple lines."
            }
            Self::Badge => "![Badge](https://img.shields.io/badge/status-active-brightgreen)",
            Self::Link => "[Link text](https://example.com)",
            Self::Image => "![Alt text](image-url.jpg)",
            Self::Math => "$$\nE = mc^2\n$$",
        }
    }

    pub fn all() -> &'static [TemplateKey] {
        &[
            Self::Table,
            Self::CodeBlock,
            Self::Checklist,
            Self::Quote,
            Self::Badge,
            Self::Link,
            Self::Image,
            Self::Math,
        ]
    }
}

/// Append the template's snippet to the buffer, separated by a blank line.
///
/// The selection is deliberately not repositioned; focus management belongs
/// to the presentation layer.
pub fn insert_template(text: &str, key: TemplateKey) -> String {
    let mut out = String::with_capacity(text.len() + 2 + key.snippet().len());
    out.push_str(text);
    out.push_str("\n\n");
    out.push_str(key.snippet());
    out
}

/// Resolve a string key against the catalog and append its snippet.
/// Unknown names fail instead of splicing garbage into the buffer.
pub fn insert_template_by_name(text: &str, name: &str) -> Result<String> {
    let key = TemplateKey::parse(name)
        .ok_or_else(|| EditorError::UnknownTemplate(name.to_string()))?;
    Ok(insert_template(text, key))
}
