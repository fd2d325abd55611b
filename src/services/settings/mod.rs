mod mapper;
mod service;

pub use mapper::{settings_to_bounds, settings_to_config};
pub use service::SettingsService;
