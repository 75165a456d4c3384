pub mod app_settings_mutation;
pub mod app_settings_query;
pub mod global_tag_mutation;
pub mod global_tag_query;
pub mod tag_entry_mutation;
pub mod tag_entry_query;
