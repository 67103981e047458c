use std::io::Write;
use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose};
use tempfile::TempPath;

use crate::domain::{AudioFormat, DetectionRequest};

const TEMP_FILE_PREFIX: &str = "voice-detect-";

#[derive(Debug, thiserror::Error)]
pub enum MaterializeError {
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("decoded audio is empty")]
    Empty,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("materialization task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Writes decoded request audio to uniquely named temporary files.
#[derive(Debug, Clone, Default)]
pub struct AudioMaterializer {
    temp_dir: Option<PathBuf>,
}

impl AudioMaterializer {
    pub fn new(temp_dir: Option<PathBuf>) -> Self {
        Self { temp_dir }
    }

    /// Decoding and the file write run on the blocking pool. If the caller
    /// is cancelled mid-write, the finished file is dropped with the task
    /// output and removed.
    pub async fn materialize(
        &self,
        request: &DetectionRequest,
    ) -> Result<MaterializedAudio, MaterializeError> {
        let audio_base64 = request.audio_base64.clone();
        let format = request.format;
        let temp_dir = self.temp_dir.clone();

        let audio = tokio::task::spawn_blocking(move || {
            write_audio_file(&audio_base64, format, temp_dir.as_deref())
        })
        .await??;

        tracing::debug!(
            path = %audio.path.display(),
            bytes = audio.size_bytes,
            format = %audio.format,
            "Audio materialized"
        );
        Ok(audio)
    }
}

fn write_audio_file(
    audio_base64: &str,
    format: AudioFormat,
    temp_dir: Option<&Path>,
) -> Result<MaterializedAudio, MaterializeError> {
    let bytes = decode_base64(audio_base64)?;
    if bytes.is_empty() {
        return Err(MaterializeError::Empty);
    }

    let suffix = format!(".{}", format.extension());
    let mut builder = tempfile::Builder::new();
    builder.prefix(TEMP_FILE_PREFIX).suffix(&suffix);

    let mut file = match temp_dir {
        Some(dir) => builder.tempfile_in(dir)?,
        None => builder.tempfile()?,
    };
    file.write_all(&bytes)?;
    file.flush()?;

    Ok(MaterializedAudio {
        path: file.into_temp_path(),
        format,
        size_bytes: bytes.len() as u64,
    })
}

/// Decoded audio on disk, owned by exactly one request.
///
/// The file is removed when this value is dropped, which covers normal
/// return, early `?` exits and cancellation of the owning future.
#[derive(Debug)]
pub struct MaterializedAudio {
    path: TempPath,
    format: AudioFormat,
    size_bytes: u64,
}

impl MaterializedAudio {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

impl Drop for MaterializedAudio {
    fn drop(&mut self) {
        tracing::debug!(path = %self.path.display(), "Removing materialized audio");
    }
}

/// Standard alphabet with padding. ASCII whitespace (line-wrapped encoders)
/// is ignored.
fn decode_base64(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    if text.bytes().any(|b| b.is_ascii_whitespace()) {
        let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        return general_purpose::STANDARD.decode(compact);
    }
    general_purpose::STANDARD.decode(text)
}
