//! Multipart form collection.
//!
//! The gig editor and the onboarding step post `multipart/form-data` with
//! repeated checkbox fields and file inputs, which the urlencoded `Form`
//! extractor cannot represent. [`FormFields`] collects every part in arrival
//! order so the form parsers can look fields up by name.

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use base64::{Engine, engine::general_purpose::STANDARD};
use workforge_core::{GigMedia, MediaType};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A file uploaded through a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Embed the file as a `data:<mime>;base64,...` URL.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            STANDARD.encode(&self.bytes)
        )
    }

    /// Gallery entry for this file; `video/*` uploads are videos.
    #[must_use]
    pub fn media(&self) -> GigMedia {
        GigMedia {
            url: self.to_data_url(),
            kind: MediaType::from_content_type(&self.content_type),
        }
    }
}

/// Text fields and files of a submitted form, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    texts: Vec<(String, String)>,
    files: Vec<(String, UploadedFile)>,
}

impl FormFields {
    /// Drain a multipart body.
    ///
    /// File inputs left empty by the browser (no file name and no bytes) are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns the multipart error if the body is malformed or a field cannot
    /// be read.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut fields = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            if let Some(file_name) = field.file_name().map(ToString::to_string) {
                let content_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_CONTENT_TYPE)
                    .to_string();
                let bytes = field.bytes().await?;
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                fields.push_file(
                    name,
                    UploadedFile {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    },
                );
            } else {
                let value = field.text().await?;
                fields.push_text(name, value);
            }
        }

        tracing::debug!(
            texts = fields.texts.len(),
            files = fields.files.len(),
            "collected form fields"
        );
        Ok(fields)
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.texts.push((name.into(), value.into()));
    }

    pub fn push_file(&mut self, name: impl Into<String>, file: UploadedFile) {
        self.files.push((name.into(), file));
    }

    /// First value of a text field, `""` when absent.
    #[must_use]
    pub fn text(&self, name: &str) -> &str {
        self.texts
            .iter()
            .find(|(n, _)| n == name)
            .map_or("", |(_, v)| v.as_str())
    }

    /// Every value of a repeated text field.
    #[must_use]
    pub fn all(&self, name: &str) -> Vec<&str> {
        self.texts
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether a checkbox was submitted.
    #[must_use]
    pub fn is_checked(&self, name: &str) -> bool {
        self.texts.iter().any(|(n, _)| n == name)
    }

    /// Uploaded files for an input, in arrival order.
    pub fn files<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a UploadedFile> + 'a {
        self.files
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, f)| f)
    }

    #[must_use]
    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f)
    }
}
