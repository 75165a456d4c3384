use tagday_backend::{settings, startup, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let settings = settings::get_settings().expect("Failed to read settings.");

    let (subscriber, _guard) = telemetry::get_subscriber(settings.debug);
    telemetry::init_subscriber(subscriber);

    let application = startup::Application::build(settings).await?;

    tracing::event!(target: "backend", tracing::Level::INFO, "Listening on http://127.0.0.1:{}/", application.port());

    application.run_until_stopped().await?;
    Ok(())
}
