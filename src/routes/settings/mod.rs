mod get;
mod update;

use actix_web::web::{scope, ServiceConfig};

pub fn settings_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/settings")
            .service(get::get_settings)
            .service(update::update_settings),
    );
}
