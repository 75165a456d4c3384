mod global_tag;
mod tag_entry;

pub use global_tag::{global_tag, GlobalTagFactory};
pub use tag_entry::{tag_entry, TagEntryFactory};
