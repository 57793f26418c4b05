use crate::domain::Document;
use crate::error::{EditorError, Result};

/// Version-pinned CDN reference to the browser-side Markdown renderer used
/// by exported HTML files.
const RENDERER_CDN_URL: &str = "https://cdn.jsdelivr.net/npm/marked@12.0.2/marked.min.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Html,
    PlainText,
}

impl ExportFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Markdown => "text/markdown",
            Self::Html => "text/html",
            Self::PlainText => "text/plain",
        }
    }
}

/// A named, typed byte payload ready for delivery. How it reaches the user
/// (download, file write, stdout) is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBlob {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Decode imported file bytes as UTF-8.
pub fn decode_import(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|_| EditorError::ImportFailed)
}

/// Serialize the document for the given target format.
pub fn export(document: &Document, format: ExportFormat) -> Result<ExportBlob> {
    let blob = match format {
        ExportFormat::Markdown => ExportBlob {
            file_name: document.file_name.clone(),
            mime_type: format.mime_type(),
            bytes: document.text.clone().into_bytes(),
        },
        ExportFormat::PlainText => ExportBlob {
            file_name: rewrite_extension(&document.file_name, "txt"),
            mime_type: format.mime_type(),
            bytes: document.text.clone().into_bytes(),
        },
        ExportFormat::Html => ExportBlob {
            file_name: rewrite_extension(&document.file_name, "html"),
            mime_type: format.mime_type(),
            bytes: render_html_shell(document)?.into_bytes(),
        },
    };
    Ok(blob)
}

/// Rewrite the trailing `.md` extension to `new_ext`. Names without a
/// trailing `.md` get the new extension appended instead, so an export never
/// reuses the Markdown name verbatim.
pub fn rewrite_extension(file_name: &str, new_ext: &str) -> String {
    match file_name.strip_suffix(".md") {
        Some(stem) => format!("{}.{}", stem, new_ext),
        None => format!("{}.{}", file_name, new_ext),
    }
}

/// Escape the six characters that are unsafe when document text is
/// interpolated directly into HTML markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Encode the buffer as a JavaScript string literal.
///
/// JSON string encoding is a valid JS literal; `</` is additionally written
/// as `<\/` (the same string value) so the buffer can never terminate the
/// surrounding `<script>` element. The literal round-trips byte-exactly
/// through the browser's rendering call.
fn js_string_literal(text: &str) -> Result<String> {
    let json = serde_json::to_string(text)?;
    Ok(json.replace("</", "<\\/"))
}

/// Build a self-contained HTML document embedding the raw buffer.
///
/// The file renders itself when opened in a browser: the buffer is embedded
/// as a string literal and handed to the CDN-loaded renderer client-side.
/// No Markdown is converted here.
fn render_html_shell(document: &Document) -> Result<String> {
    let title = escape_html(&document.file_name);
    let content = js_string_literal(&document.text)?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <meta charset="utf-8">
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
               max-width: 800px; margin: 0 auto; padding: 20px; line-height: 1.6; }}
        code {{ background: #f4f4f4; padding: 2px 4px; border-radius: 3px; }}
        pre {{ background: #f4f4f4; padding: 10px; border-radius: 5px; overflow-x: auto; }}
        blockquote {{ border-left: 4px solid #ddd; margin: 0; padding-left: 20px; }}
        table {{ border-collapse: collapse; width: 100%; }}
        th, td {{ border: 1px solid #ddd; padding: 12px; text-align: left; }}
        th {{ background-color: #f2f2f2; }}
    </style>
</head>
<body>
    <div id="content"></div>
    <script src="{cdn}"></script>
    <script>
        const markdownContent = {content};
        document.getElementById('content').innerHTML = marked.parse(markdownContent);
    </script>
</body>
</html>"#,
        title = title,
        content = content,
        cdn = RENDERER_CDN_URL,
    ))
}
