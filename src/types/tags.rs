use serde::{Deserialize, Serialize};

use crate::entities::global_tag;

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct GlobalTagVisible {
    pub name: String,
    pub color: i32,
    pub hidden: bool,
    pub user_selected_color: bool,
}

impl From<global_tag::Model> for GlobalTagVisible {
    fn from(item: global_tag::Model) -> Self {
        GlobalTagVisible {
            name: item.name,
            color: item.color,
            hidden: item.hidden,
            user_selected_color: item.user_selected_color,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TagRenameRequest {
    pub new_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TagColorRequest {
    pub color: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TagHiddenRequest {
    pub hidden: bool,
}
