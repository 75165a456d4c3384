use actix_web::{
    put,
    web::{Data, Json, Path},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::routes::utils::response_500;
use crate::services::global_tag_mutation::GlobalTagMutation;
use crate::types::TagColorRequest;

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    name: String,
}

#[tracing::instrument(name = "Setting a global tag's color", skip(db))]
#[put("/{name}/color")]
pub async fn set_global_tag_color(
    db: Data<DbConn>,
    path_param: Path<PathParam>,
    req: Json<TagColorRequest>,
) -> HttpResponse {
    match GlobalTagMutation::set_color(&db, &path_param.name, req.color).await {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => response_500(e),
    }
}
