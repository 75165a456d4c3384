use actix_web::{
    dev::Server,
    web::{scope, Data},
    App, HttpServer,
};
use sea_orm::{Database, DatabaseConnection};
use std::env;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(settings: crate::settings::Settings) -> Result<Self, std::io::Error> {
        let db = get_database_connection().await;
        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = std::net::TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, db)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub async fn get_database_connection() -> DatabaseConnection {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    Database::connect(&database_url)
        .await
        .expect("Failed to open DB connection.")
}

fn run(listener: std::net::TcpListener, db: DatabaseConnection) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .service(crate::routes::health_check)
            .service(
                scope("/api")
                    .configure(crate::routes::entry_routes)
                    .configure(crate::routes::tag_routes)
                    .configure(crate::routes::settings_routes)
                    .configure(crate::routes::summary_routes),
            )
            .app_data(Data::new(db.clone()))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
