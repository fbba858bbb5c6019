pub mod client;
pub mod config;
pub mod dom;
pub mod i18n;
pub mod pages;
pub mod render;
pub mod storage;
pub mod switcher;

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "web")]
pub mod web;
