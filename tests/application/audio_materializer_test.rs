use voice_detect::application::services::{AudioMaterializer, MaterializeError};
use voice_detect::domain::{AudioFormat, DetectionRequest, Language};

use crate::helpers::{FAKE_MP3_BYTES, fake_audio_base64, files_in};

fn request(audio_base64: &str, format: AudioFormat) -> DetectionRequest {
    DetectionRequest {
        audio_base64: audio_base64.to_string(),
        format,
        language: Language::English,
    }
}

#[tokio::test]
async fn given_valid_base64_when_materializing_then_file_holds_decoded_bytes() {
    let dir = tempfile::TempDir::new().unwrap();
    let materializer = AudioMaterializer::new(Some(dir.path().to_path_buf()));

    let audio = materializer
        .materialize(&request(&fake_audio_base64(), AudioFormat::Mp3))
        .await
        .unwrap();

    assert_eq!(std::fs::read(audio.path()).unwrap(), FAKE_MP3_BYTES);
    assert_eq!(audio.size_bytes(), FAKE_MP3_BYTES.len() as u64);
    assert_eq!(audio.format(), AudioFormat::Mp3);
}

#[tokio::test]
async fn given_format_when_materializing_then_extension_is_lowercase_format() {
    let dir = tempfile::TempDir::new().unwrap();
    let materializer = AudioMaterializer::new(Some(dir.path().to_path_buf()));

    let audio = materializer
        .materialize(&request(&fake_audio_base64(), AudioFormat::M4a))
        .await
        .unwrap();

    assert_eq!(audio.path().extension().unwrap(), "m4a");
}

#[tokio::test]
async fn given_materialized_audio_when_dropped_then_file_is_removed() {
    let dir = tempfile::TempDir::new().unwrap();
    let materializer = AudioMaterializer::new(Some(dir.path().to_path_buf()));

    let audio = materializer
        .materialize(&request(&fake_audio_base64(), AudioFormat::Ogg))
        .await
        .unwrap();
    let path = audio.path().to_path_buf();
    assert!(path.exists());

    drop(audio);

    assert!(!path.exists());
    assert!(files_in(dir.path()).is_empty());
}

#[tokio::test]
async fn given_two_requests_when_materializing_then_paths_are_distinct() {
    let dir = tempfile::TempDir::new().unwrap();
    let materializer = AudioMaterializer::new(Some(dir.path().to_path_buf()));
    let req = request(&fake_audio_base64(), AudioFormat::Wav);

    let first = materializer.materialize(&req).await.unwrap();
    let second = materializer.materialize(&req).await.unwrap();

    assert_ne!(first.path(), second.path());
    assert_eq!(files_in(dir.path()).len(), 2);
}

#[tokio::test]
async fn given_malformed_base64_when_materializing_then_no_file_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let materializer = AudioMaterializer::new(Some(dir.path().to_path_buf()));

    let result = materializer.materialize(&request("not*base64!", AudioFormat::Mp3)).await;

    assert!(matches!(result, Err(MaterializeError::InvalidBase64(_))));
    assert!(files_in(dir.path()).is_empty());
}

#[tokio::test]
async fn given_line_wrapped_base64_when_materializing_then_whitespace_is_ignored() {
    let dir = tempfile::TempDir::new().unwrap();
    let materializer = AudioMaterializer::new(Some(dir.path().to_path_buf()));
    let encoded = fake_audio_base64();
    let (head, tail) = encoded.split_at(8);
    let wrapped = format!("{}\n{}\r\n", head, tail);

    let audio = materializer
        .materialize(&request(&wrapped, AudioFormat::Mp3))
        .await
        .unwrap();

    assert_eq!(std::fs::read(audio.path()).unwrap(), FAKE_MP3_BYTES);
}

#[tokio::test]
async fn given_whitespace_only_audio_when_materializing_then_reports_empty() {
    let materializer = AudioMaterializer::default();

    let result = materializer.materialize(&request("  \n ", AudioFormat::Mp3)).await;

    assert!(matches!(result, Err(MaterializeError::Empty)));
}

#[tokio::test]
async fn given_missing_temp_dir_when_materializing_then_reports_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let materializer = AudioMaterializer::new(Some(dir.path().join("does-not-exist")));

    let result = materializer
        .materialize(&request(&fake_audio_base64(), AudioFormat::Mp3))
        .await;

    assert!(matches!(result, Err(MaterializeError::Io(_))));
}
