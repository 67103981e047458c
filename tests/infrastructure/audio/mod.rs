
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::extract::Multipart;
use axum::http::HeaderMap;

/// What a mock transcription endpoint saw in one upload.
#[derive(Debug, Clone, Default)]
pub struct CapturedUpload {
    pub headers: HashMap<String, String>,
    pub fields: HashMap<String, String>,
    pub file_name: Option<String>,
    pub file_content_type: Option<String>,
    pub file_bytes: Vec<u8>,
}

pub type UploadSlot = Arc<Mutex<Option<CapturedUpload>>>;

pub async fn capture_upload(slot: UploadSlot, headers: HeaderMap, mut multipart: Multipart) {
    let mut captured = CapturedUpload {
        headers: headers
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect(),
        ..Default::default()
    };

    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            captured.file_name = field.file_name().map(String::from);
            captured.file_content_type = field.content_type().map(String::from);
            captured.file_bytes = field.bytes().await.unwrap().to_vec();
        } else {
            captured.fields.insert(name, field.text().await.unwrap());
        }
    }

    *slot.lock().unwrap() = Some(captured);
}

pub fn write_audio(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}
