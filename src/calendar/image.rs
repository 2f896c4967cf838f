use std::io;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Read a file and return it as a `data:` URL.
pub async fn load_data_url(path: &Path) -> io::Result<String> {
    let bytes = tokio::fs::read(path).await?;
    Ok(encode_data_url(&bytes, media_type(path)))
}

pub fn encode_data_url(bytes: &[u8], media_type: &str) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

pub fn media_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, PartialEq)]
pub enum ImagePoll {
    Pending,
    Ready(String),
    Failed,
}

/// An in-flight image read. Dropping it aborts the task, so a result can
/// only ever reach the owner that started it.
#[derive(Debug)]
pub struct ImageLoad {
    path: PathBuf,
    rx: oneshot::Receiver<Option<String>>,
    handle: JoinHandle<()>,
}

impl ImageLoad {
    /// Must be called from within a tokio runtime.
    pub fn spawn(path: PathBuf) -> Self {
        let (tx, rx) = oneshot::channel();
        let task_path = path.clone();
        let handle = tokio::spawn(async move {
            let url = match load_data_url(&task_path).await {
                Ok(url) => {
                    debug!(path = %task_path.display(), bytes = url.len(), "image read");
                    Some(url)
                }
                Err(err) => {
                    warn!(path = %task_path.display(), error = %err, "could not read image");
                    None
                }
            };
            let _ = tx.send(url);
        });
        Self { path, rx, handle }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn poll(&mut self) -> ImagePoll {
        match self.rx.try_recv() {
            Ok(Some(url)) => ImagePoll::Ready(url),
            Ok(None) | Err(TryRecvError::Closed) => ImagePoll::Failed,
            Err(TryRecvError::Empty) => ImagePoll::Pending,
        }
    }
}

impl Drop for ImageLoad {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
