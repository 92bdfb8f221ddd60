use backend::conf;
use backend::startup::Application;
use backend::trace;

#[tokio::main]
async fn main() -> hyper::Result<()> {
    let env = conf::Env::derive();
    let env_conf = conf::EnvConf::derive(env);
    let conf = conf::Conf::new(env, env_conf);

    let subscriber = trace::TracingSubscriber::new()
        .pretty(conf.log.pretty)
        .build(std::io::stdout);
    trace::init_global_default(subscriber);

    tracing::info!("APP_ENV={}", conf.env.as_ref());

    let application = Application::build(&conf).await;

    application.server().await
}
