use serde::{Deserialize, Serialize};

use crate::entities::app_settings;

#[derive(Serialize, Deserialize, PartialEq, Debug, Default)]
pub struct SettingsVisible {
    pub show_hidden_tags: bool,
}

impl From<app_settings::Model> for SettingsVisible {
    fn from(item: app_settings::Model) -> Self {
        SettingsVisible {
            show_hidden_tags: item.show_hidden_tags,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SettingsUpdateRequest {
    pub show_hidden_tags: bool,
}
