mod entries;
mod health;
mod settings;
mod summaries;
mod tags;
mod utils;

pub use entries::entry_routes;
pub use health::health_check;
pub use settings::settings_routes;
pub use summaries::summary_routes;
pub use tags::tag_routes;
