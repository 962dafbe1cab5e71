use std::{net::SocketAddr, time::Duration};

use axum::{Router, extract::Path, response::IntoResponse, body::StreamBody, routing::get};
use reqwest::StatusCode;
use tokio::task::JoinHandle;
use tokio_util::io::ReaderStream;

/// Stands in for the scraped site, serving stored pages from `tests/integration/external`.
pub struct ExternalServer {
    port: u16,
    handles: Vec<JoinHandle<()>>,
}

impl Drop for ExternalServer {
    fn drop(&mut self) {
        for e in &self.handles {
            e.abort();
        }
    }
}

impl ExternalServer {
    pub fn new(port: u16) -> ExternalServer {
        ExternalServer { port, handles: vec![] }
    }

    pub async fn start(&mut self) {
        let port = self.port;
        let external_mock = tokio::spawn(async move { ExternalServer::serve_external_data(port).await });
        self.handles.push(external_mock);

        tokio::time::sleep(Duration::from_secs(1)).await; // wait for mock to start
    }

    pub fn get_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    async fn serve_external_data(port: u16) {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let app = Router::new()
            .route("/*page", get(ExternalServer::get_page));

        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .unwrap();
    }

    async fn get_page(Path(page): Path<String>) -> impl IntoResponse {
        ExternalServer::get_file_from(format!("./tests/integration/external/{}.html", page.trim_start_matches('/'))).await
    }

    async fn get_file_from(path: String) -> impl IntoResponse {
        let file = match tokio::fs::File::open(path).await {
            Ok(file) => file,
            Err(err) => return Err((StatusCode::NOT_FOUND, format!("File not found: {}", err))),
        };
        let stream = ReaderStream::new(file);
        let body = StreamBody::new(stream);
        Ok(body)
    }
}
