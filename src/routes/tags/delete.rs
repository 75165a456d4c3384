use actix_web::{
    delete,
    web::{Data, Path},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::routes::utils::response_500;
use crate::services::global_tag_mutation::GlobalTagMutation;

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    name: String,
}

#[tracing::instrument(name = "Deleting a global tag", skip(db))]
#[delete("/{name}")]
pub async fn delete_global_tag(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match GlobalTagMutation::delete(&db, &path_param.name).await {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => response_500(e),
    }
}
