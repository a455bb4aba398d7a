pub mod analysis;
pub mod app;
pub mod cache;
pub mod catalog;
pub mod config;
mod deadline;
pub mod error;
pub mod event;
pub mod fixture;
pub mod playback;
pub mod share;
pub mod story;
pub mod ui;

#[cfg(test)]
mod testing;
