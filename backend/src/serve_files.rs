use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug)]
pub struct File {
    pub contents: Vec<u8>,
    pub path: std::path::PathBuf,
    pub modified: std::time::SystemTime,
}

pub fn file_response(file: &File) -> axum::response::Response {
    use axum::response::IntoResponse;
    let last_modified = httpdate::fmt_http_date(file.modified);
    let mime_type = mime_guess::from_path(&file.path).first_or_text_plain();

    axum::http::Response::builder()
        .status(axum::http::StatusCode::OK)
        .header(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_str(mime_type.as_ref()).unwrap(),
        )
        .header(axum::http::header::LAST_MODIFIED, last_modified)
        .body(axum::body::boxed(axum::body::Full::<bytes::Bytes>::from(
            file.contents.clone(),
        )))
        .unwrap_or_else(|_| axum::http::StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

#[derive(Debug, Clone)]
pub struct Cache {
    request_path_to_file: Arc<Mutex<clru::CLruCache<String, Arc<File>>>>,
}

impl Cache {
    pub fn new(request_path_lru_size: std::num::NonZeroUsize) -> Self {
        Self {
            request_path_to_file: Arc::new(Mutex::new(clru::CLruCache::new(request_path_lru_size))),
        }
    }

    pub async fn get(&self, path: &str) -> Option<Arc<File>> {
        self.request_path_to_file
            .lock()
            .await
            .get(path)
            .map(Clone::clone)
    }

    pub async fn insert(&self, path: String, file: Arc<File>) {
        self.request_path_to_file.lock().await.put(path, file);
    }
}

fn read_file(file_path: std::path::PathBuf) -> std::io::Result<File> {
    let contents = std::fs::read(&file_path)?;
    let modified = std::fs::metadata(&file_path)?.modified()?;
    Ok(File {
        contents,
        path: file_path,
        modified,
    })
}

pub mod fallback {
    use crate::conf::Conf;
    use axum::{response::IntoResponse, Extension};

    use super::*;

    pub async fn fallback(
        uri: axum::http::Uri,
        Extension(cache): Extension<Cache>,
        Extension(conf): Extension<Conf>,
    ) -> axum::response::Response {
        let request_path = uri.path().trim_start_matches('/').to_string();

        if let Some(file) = cache.get(&request_path).await {
            tracing::debug!("cache hit for request path: {request_path:?}");
            return file_response(&file);
        }

        let dir = std::path::Path::new(&conf.serve.dir);
        let file_path = dir.join(&request_path);

        tracing::info!("Trying to serve: {:?}", file_path);

        let file_path = if file_path.is_file() {
            file_path
        } else {
            match &conf.serve.fallback {
                Some(fallback) => {
                    let fallback = std::path::Path::new(fallback);

                    if fallback.is_file() {
                        fallback.to_path_buf()
                    } else {
                        return hyper::StatusCode::INTERNAL_SERVER_ERROR.into_response();
                    }
                }
                None => return hyper::StatusCode::NOT_FOUND.into_response(),
            }
        };

        match read_file(file_path) {
            Ok(file) => {
                let file = Arc::new(file);
                let response = file_response(&file);
                cache.insert(request_path, file).await;
                response
            }
            Err(error) => {
                tracing::error!("failed to read {request_path:?}: {error}");
                hyper::StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
