use actix_web::{
    put,
    web::{Data, Json, Path},
    HttpResponse,
};
use sea_orm::{DbConn, DbErr, TransactionError};

use crate::domain::tag_input;
use crate::routes::utils::{response_400, response_409, response_500};
use crate::services::global_tag_mutation::GlobalTagMutation;
use crate::types::{CustomDbErr, TagRenameRequest};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    name: String,
}

#[tracing::instrument(name = "Renaming a global tag", skip(db))]
#[put("/{name}")]
pub async fn rename_global_tag(
    db: Data<DbConn>,
    path_param: Path<PathParam>,
    req: Json<TagRenameRequest>,
) -> HttpResponse {
    if !tag_input::is_valid_name(&req.new_name) {
        return response_400(&tag_input::ValidationError::InvalidName.to_string());
    }
    match GlobalTagMutation::rename(&db, &path_param.name, &req.new_name).await {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => match &e {
            TransactionError::Transaction(DbErr::Custom(ce)) => match ce.parse::<CustomDbErr>() {
                Ok(CustomDbErr::Duplicate) => {
                    response_409("Another tag with this name already exists.")
                }
                _ => response_500(&e),
            },
            _ => response_500(&e),
        },
    }
}
