use std::collections::HashMap;

use axum::extract::Multipart;

use crate::response::ApiResponse;
use crate::ApiError;

use super::{MediaKind, UploadedFile};

/// A buffered multipart form: text fields plus the expected file fields.
#[derive(Debug, Default)]
pub struct Form {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl Form {
    /// Reads every part. `file_fields` names the accepted file fields and the
    /// media kind each must carry.
    pub async fn parse(
        mut multipart: Multipart,
        file_fields: &[(&str, MediaKind)],
    ) -> ApiResponse<Self> {
        let mut form = Form::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            let Some(original_name) = field.file_name().map(str::to_string)
            else {
                let text = field.text().await?;
                form.fields.insert(name, text);
                continue;
            };

            let Some(&(_, expected)) =
                file_fields.iter().find(|(accepted, _)| *accepted == name)
            else {
                return Err(ApiError::ValidationError(format!(
                    "Unexpected file field: {}",
                    name
                )));
            };

            let content_type =
                field.content_type().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;

            // browsers send an empty part when no file was chosen
            if original_name.is_empty() && bytes.is_empty() {
                continue;
            }

            match MediaKind::classify(&content_type) {
                Some(kind) if kind == expected => {}
                Some(_) => {
                    return Err(ApiError::UnsupportedMediaType(format!(
                        "Field {} only accepts {} files, got {}",
                        name, expected, content_type
                    )));
                }
                None => {
                    return Err(ApiError::UnsupportedMediaType(format!(
                        "Invalid file type: {}",
                        content_type
                    )));
                }
            }

            form.files.insert(
                name,
                UploadedFile {
                    kind: expected,
                    original_name,
                    bytes,
                },
            );
        }

        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Like [`Form::text`] but treats an empty value as missing.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.text(name).filter(|value| !value.trim().is_empty())
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}
