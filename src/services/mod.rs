// Service module exports

pub mod calendar;
pub mod settings;
