//! Minimal DOCX reader: pulls run text out of `word/document.xml`.

use std::io::{Cursor, Read};
use std::sync::OnceLock;

use regex::Regex;

use super::ExtractionError;

const DOCUMENT_XML: &str = "word/document.xml";

fn paragraph_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)<w:p[ >].*?</w:p>|<w:p/>").expect("paragraph pattern is valid")
    })
}

/// Run text, or a tab / line break element between runs.
fn run_content_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>|<w:(tab|br|cr)(?:\s[^>]*)?/>")
            .expect("run content pattern is valid")
    })
}

/// One output line per non-empty paragraph.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::Word(format!("not a zip archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_XML)
        .map_err(|e| ExtractionError::Word(format!("missing {DOCUMENT_XML}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Word(format!("unreadable {DOCUMENT_XML}: {e}")))?;

    Ok(document_xml_to_text(&xml))
}

/// Runs within a paragraph are concatenated as Word stores them (a single word may
/// span several runs); `<w:tab/>` becomes a tab and `<w:br/>`/`<w:cr/>` a line break.
pub(crate) fn document_xml_to_text(xml: &str) -> String {
    let mut lines = Vec::new();
    for paragraph in paragraph_re().find_iter(xml) {
        let mut text = String::new();
        for c in run_content_re().captures_iter(paragraph.as_str()) {
            match (c.get(1), c.get(2).map(|m| m.as_str())) {
                (Some(run), _) => text.push_str(&decode_entities(run.as_str())),
                (None, Some("tab")) => text.push('\t'),
                (None, Some(_)) => text.push('\n'),
                (None, None) => {}
            }
        }
        lines.extend(
            text.lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string),
        );
    }
    lines.join("\n")
}

fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p/>
    <w:p w:rsidR="00A1"><w:r><w:t xml:space="preserve">Skills: </w:t></w:r><w:r><w:t>Python &amp; SQL</w:t></w:r></w:p>
    <w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Experience</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    fn build_docx(xml: &str) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            writer
                .start_file(DOCUMENT_XML, zip::write::FileOptions::default())
                .unwrap();
            writer.write_all(xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buf.into_inner()
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let text = document_xml_to_text(SAMPLE_XML);
        assert_eq!(text, "Jane Doe\nSkills: Python & SQL\nExperience");
    }

    #[test]
    fn test_pstyle_does_not_start_a_paragraph() {
        let xml = r#"<w:p><w:pPr><w:pStyle w:val="x"/></w:pPr><w:r><w:t>Only</w:t></w:r></w:p>"#;
        assert_eq!(document_xml_to_text(xml), "Only");
    }

    #[test]
    fn test_tabs_and_breaks_separate_words() {
        let xml = concat!(
            r#"<w:p><w:r><w:t>Skills:</w:t><w:tab/><w:t>Python</w:t><w:br/>"#,
            r#"<w:t>SQL</w:t><w:cr/><w:t>Docker</w:t><w:br w:type="page"/></w:r></w:p>"#,
        );
        let text = document_xml_to_text(xml);
        assert_eq!(text, "Skills:\tPython\nSQL\nDocker");

        let skills = ["python", "sql", "docker"].map(String::from);
        let result = crate::matching::matcher::match_skills(&skills, &text);
        assert_eq!(result.score, 100);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_split_runs_rejoin_into_one_word() {
        let xml = r#"<w:p><w:r><w:t>Kuber</w:t></w:r><w:r><w:t>netes</w:t></w:r></w:p>"#;
        assert_eq!(document_xml_to_text(xml), "Kubernetes");
    }

    #[test]
    fn test_entities_decoded_once() {
        assert_eq!(decode_entities("a &amp;lt; b"), "a &lt; b");
        assert_eq!(decode_entities("&lt;tag&gt; &quot;x&quot;"), "<tag> \"x\"");
    }

    #[test]
    fn test_extract_from_zip_archive() {
        let bytes = build_docx(SAMPLE_XML);
        let text = extract_docx_text(&bytes).unwrap();
        assert!(text.contains("Python & SQL"));
    }

    #[test]
    fn test_zip_without_document_xml_is_an_error() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            writer
                .start_file("readme.txt", zip::write::FileOptions::default())
                .unwrap();
            writer.write_all(b"hello").unwrap();
            writer.finish().unwrap();
        }
        let err = extract_docx_text(&buf.into_inner()).unwrap_err();
        assert!(err.to_string().contains(DOCUMENT_XML));
    }
}
