//! Downloadable outline artifacts and inline download links.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::NaiveDateTime;

/// Content type attached to every artifact, including the PDF-named one.
pub const CONTENT_TYPE: &str = "text/plain";

const FILENAME_PREFIX: &str = "blog_outline";
const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadFormat {
    Text,
    Pdf,
}

impl DownloadFormat {
    pub const ALL: [DownloadFormat; 2] = [DownloadFormat::Text, DownloadFormat::Pdf];

    pub fn extension(&self) -> &'static str {
        match self {
            DownloadFormat::Text => "txt",
            DownloadFormat::Pdf => "pdf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DownloadFormat::Text => "Download as Text File",
            DownloadFormat::Pdf => "Download as PDF",
        }
    }

    /// True when the filename extension does not match the bytes.
    ///
    /// The PDF option carries the same plain text as the text option; no PDF
    /// rendering happens.
    pub fn is_mislabeled(&self) -> bool {
        matches!(self, DownloadFormat::Pdf)
    }
}

/// A named blob ready to be written or linked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub format: DownloadFormat,
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl DownloadArtifact {
    /// Inline link embedding this artifact's bytes.
    pub fn link(&self) -> String {
        anchor(&self.bytes, self.content_type, &self.filename, self.format.label())
    }
}

/// `blog_outline_YYYYMMDD-HHMMSS.<ext>`
pub fn outline_filename(timestamp: NaiveDateTime, format: DownloadFormat) -> String {
    format!("{}_{}.{}", FILENAME_PREFIX, timestamp.format(TIMESTAMP_FORMAT), format.extension())
}

/// Build one artifact per format, all sharing `timestamp` and `content`.
pub fn outline_artifacts(content: &[u8], timestamp: NaiveDateTime) -> Vec<DownloadArtifact> {
    DownloadFormat::ALL
        .into_iter()
        .map(|format| {
            if format.is_mislabeled() {
                tracing::warn!(
                    extension = format.extension(),
                    content_type = CONTENT_TYPE,
                    "artifact extension does not match its plain-text content"
                );
            }
            DownloadArtifact {
                format,
                filename: outline_filename(timestamp, format),
                content_type: CONTENT_TYPE,
                bytes: content.to_vec(),
            }
        })
        .collect()
}

/// Anchor tag whose target is a base64 `data:` URL of `content`.
pub fn download_link(content: &[u8], filename: &str, link_text: &str) -> String {
    anchor(content, CONTENT_TYPE, filename, link_text)
}

fn anchor(content: &[u8], content_type: &str, filename: &str, link_text: &str) -> String {
    format!(
        r#"<a href="data:{};base64,{}" download="{}" class="download-link">{}</a>"#,
        content_type,
        STANDARD.encode(content),
        filename,
        link_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap().and_hms_opt(9, 5, 2).unwrap()
    }

    #[test]
    fn filename_uses_compact_timestamp() {
        assert_eq!(
            outline_filename(timestamp(), DownloadFormat::Text),
            "blog_outline_20240307-090502.txt"
        );
        assert_eq!(
            outline_filename(timestamp(), DownloadFormat::Pdf),
            "blog_outline_20240307-090502.pdf"
        );
    }

    #[test]
    fn artifacts_share_identical_bytes() {
        let artifacts = outline_artifacts("TITLE: Hi\n".as_bytes(), timestamp());
        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0].bytes, artifacts[1].bytes);
        assert!(artifacts.iter().all(|a| a.content_type == "text/plain"));
        assert_ne!(artifacts[0].filename, artifacts[1].filename);
    }

    #[test]
    fn only_pdf_is_mislabeled() {
        assert!(!DownloadFormat::Text.is_mislabeled());
        assert!(DownloadFormat::Pdf.is_mislabeled());
    }

    #[test]
    fn link_embeds_base64_content() {
        let link = download_link(b"hello", "out.txt", "Download");
        let expected = concat!(
            r#"<a href="data:text/plain;base64,aGVsbG8=" download="out.txt" "#,
            r#"class="download-link">Download</a>"#
        );
        assert_eq!(link, expected);
    }

    #[test]
    fn artifact_link_uses_format_label() {
        let artifacts = outline_artifacts(b"x", timestamp());
        let pdf = &artifacts[1];
        assert!(pdf.link().contains(r#"download="blog_outline_20240307-090502.pdf""#));
        assert!(pdf.link().ends_with(">Download as PDF</a>"));
    }

    #[test]
    fn artifact_link_carries_its_own_content_type() {
        let mut artifact = outline_artifacts(b"x", timestamp()).remove(1);
        assert!(artifact.link().starts_with(r#"<a href="data:text/plain;base64,eA==""#));

        artifact.content_type = "application/pdf";
        assert!(artifact.link().starts_with(r#"<a href="data:application/pdf;base64,eA==""#));
    }
}
