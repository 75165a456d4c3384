pub mod app_settings;
pub mod global_tag;
pub mod tag_entry;

pub mod prelude {
    pub use super::app_settings::Entity as AppSettings;
    pub use super::global_tag::Entity as GlobalTag;
    pub use super::tag_entry::Entity as TagEntry;
}
