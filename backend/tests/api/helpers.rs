use backend::conf;
use backend::startup::Application;
use backend::trace;
use once_cell::sync::Lazy;
use reqwest::RequestBuilder;
use static_routes::*;

static TRACING: Lazy<()> = Lazy::new(|| {
    let subscriber = trace::TracingSubscriber::new();

    if std::env::var("TEST_LOG").is_ok() {
        trace::init_global_default(subscriber.build(std::io::stdout));
    } else {
        trace::init_global_default(subscriber.build(std::io::sink));
    };
});

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let conf = conf::Conf::new(conf::Env::Local, conf::EnvConf::test_default());

    let application = Application::build(&conf).await;

    let address = format!("http://{}:{}", application.host(), application.port());

    let _ = tokio::spawn(application.server());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address,
        api_client,
    }
}

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub fn get(&self, static_path: impl Get) -> RequestBuilder {
        self.api_client
            .get(static_path.get().complete_with_base(&self.address))
    }

    pub fn post(&self, static_path: impl Post) -> RequestBuilder {
        self.api_client
            .post(static_path.post().complete_with_base(&self.address))
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.post(routes().api.login)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}
