// Mood Calendar Library
// Locale-aware infinite month calendar engine for the mood journal

pub mod models;
pub mod services;
pub mod utils;
