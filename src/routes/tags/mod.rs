mod color;
mod delete;
mod hidden;
mod list;
mod palette;
mod rename;

use actix_web::web::{scope, ServiceConfig};

pub fn tag_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/tags")
            .service(list::list_global_tags)
            .service(palette::list_palette)
            .service(rename::rename_global_tag)
            .service(delete::delete_global_tag)
            .service(color::set_global_tag_color)
            .service(hidden::set_global_tag_hidden),
    );
}
