// Tracing definitions
//

use tracing::{subscriber::set_global_default, Subscriber};
use tracing_log::LogTracer;
use tracing_subscriber::{
    filter,
    layer::{Layer, SubscriberExt},
    EnvFilter, Registry,
};

pub struct TracingSubscriber {
    crate_level: tracing::Level,
    rust_log_fallback: String,
    pretty: bool,
}

impl Default for TracingSubscriber {
    fn default() -> Self {
        Self {
            crate_level: tracing::Level::DEBUG,
            rust_log_fallback: "debug".into(),
            pretty: false,
        }
    }
}

impl TracingSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(unused)]
    pub fn crate_level(mut self, value: tracing::Level) -> Self {
        self.crate_level = value;
        self
    }

    #[allow(unused)]
    pub fn rust_log_fallback(mut self, value: impl AsRef<str>) -> Self {
        self.rust_log_fallback = value.as_ref().into();
        self
    }

    pub fn pretty(mut self, value: bool) -> Self {
        self.pretty = value;
        self
    }

    pub fn build<Sink>(self, sink: Sink) -> Box<dyn Subscriber + Sync + Send>
    where
        Sink: for<'a> tracing_subscriber::fmt::MakeWriter<'a> + Send + Sync + 'static,
    {
        // depends on RUST_LOG env var
        let env_filter = EnvFilter::try_from_default_env()
            // if unset, use rust_log_fallback
            .or_else(|_| EnvFilter::try_new(self.rust_log_fallback))
            .expect("correct RUST_LOG");

        let target_filter = filter::Targets::new()
            .with_target("backend", self.crate_level)
            .with_target("hyper", tracing::Level::INFO)
            .with_default(tracing::Level::TRACE);

        // pretty() changes the layer type, hence two boxed branches
        if self.pretty {
            Box::new(
                Registry::default().with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(sink)
                        .with_filter(env_filter)
                        .with_filter(target_filter),
                ),
            )
        } else {
            Box::new(
                Registry::default().with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(sink)
                        .with_filter(env_filter)
                        .with_filter(target_filter),
                ),
            )
        }
    }
}

pub fn init_global_default(subscriber: Box<dyn Subscriber + Sync + Send>) {
    LogTracer::init().expect("Failed to set logger");
    set_global_default(subscriber).expect("Failed to set subscriber");
}

#[derive(Clone, Default)]
pub struct RequestIdProducer {
    counter: std::sync::Arc<std::sync::atomic::AtomicU64>,
}

impl tower_http::request_id::MakeRequestId for RequestIdProducer {
    fn make_request_id<B>(
        &mut self,
        _request: &hyper::http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let request_id = self
            .counter
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
            .to_string()
            .parse()
            .unwrap();

        Some(tower_http::request_id::RequestId::new(request_id))
    }
}
