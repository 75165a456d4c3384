use sea_orm::Set;

use crate::entities::global_tag;

pub fn global_tag(name: &str) -> global_tag::ActiveModel {
    global_tag::ActiveModel {
        name: Set(name.to_string()),
        color: Set(0xFF1D4ED8_u32 as i32),
        hidden: Set(false),
        user_selected_color: Set(false),
    }
}

pub trait GlobalTagFactory {
    fn color(self, color: i32) -> global_tag::ActiveModel;
    fn hidden(self, hidden: bool) -> global_tag::ActiveModel;
}

impl GlobalTagFactory for global_tag::ActiveModel {
    fn color(mut self, color: i32) -> global_tag::ActiveModel {
        self.color = Set(color);
        self
    }

    fn hidden(mut self, hidden: bool) -> global_tag::ActiveModel {
        self.hidden = Set(hidden);
        self
    }
}
