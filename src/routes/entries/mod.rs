mod create;
mod delete;
mod delete_by_date_and_name;
mod list;

use actix_web::web::{scope, ServiceConfig};

pub fn entry_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/entries")
            .service(create::create_entry)
            .service(list::list_entries_for_date)
            .service(delete::delete_entry)
            .service(delete_by_date_and_name::delete_entries_for_date_and_name),
    );
}
