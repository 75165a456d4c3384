mod app_settings;
mod db;
mod entries;
mod general;
mod tags;

pub use app_settings::{SettingsUpdateRequest, SettingsVisible};
pub use db::CustomDbErr;
pub use entries::{TagEntryCreateRequest, TagEntryVisible};
pub use general::{ErrorResponse, SuccessResponse, INTERNAL_SERVER_ERROR_MESSAGE};
pub use tags::{GlobalTagVisible, TagColorRequest, TagHiddenRequest, TagRenameRequest};
