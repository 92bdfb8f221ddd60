use crate::conf::Conf;
use crate::serve_files;
use crate::trace::RequestIdProducer;
use static_routes::*;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    add_extension::AddExtensionLayer,
    cors::CorsLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit, ServiceBuilderExt,
};

pub fn router(conf: Conf) -> Router {
    use crate::routes::*;

    let api = routes().api;

    let api_router = Router::new()
        .route(api.health_check.get().postfix(), get(health_check))
        .route(api.login.post().postfix(), post(login));

    let request_tracing_layer = tower::ServiceBuilder::new()
        .set_x_request_id(RequestIdProducer::default())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &hyper::http::Request<hyper::Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                        request_id = %request.headers().get("x-request-id").unwrap().to_str().unwrap(),
                    )
                })
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(tracing::Level::INFO)
                        .latency_unit(LatencyUnit::Seconds),
                ),
        )
        .propagate_x_request_id();

    let cache = serve_files::Cache::new(std::num::NonZeroUsize::new(64).expect("nonzero"));

    Router::new()
        .nest("/api", api_router)
        .fallback(serve_files::fallback::fallback)
        .layer(AddExtensionLayer::new(cache))
        .layer(AddExtensionLayer::new(conf))
        // the login page may be opened from any origin
        .layer(CorsLayer::permissive())
        .layer(request_tracing_layer)
}

pub struct Application {
    port: u16,
    host: String,
    server: std::pin::Pin<Box<dyn std::future::Future<Output = hyper::Result<()>> + Send>>,
}

impl Application {
    pub async fn build(conf: &Conf) -> Self {
        let address = format!("{}:{}", conf.host, conf.port);
        let listener = std::net::TcpListener::bind(&address).unwrap();
        let host = conf.host.clone();
        let port = listener.local_addr().unwrap().port();
        tracing::info!("Listening on http://{}:{}", host, port);

        let app = router(conf.clone());

        let server = Box::pin(
            axum::Server::from_tcp(listener)
                .unwrap()
                .serve(app.into_make_service()),
        );

        Self { port, host, server }
    }

    // needs to consume to produce 1 server max
    pub fn server(self) -> impl std::future::Future<Output = hyper::Result<()>> + Send {
        self.server
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}
