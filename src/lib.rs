#[macro_use]
mod macros;

pub mod app;
pub mod defaults;
pub mod encode;
pub mod errors;
pub mod extractor;
pub mod filters;
pub mod generator;
pub mod handlers;
pub mod logo;
pub mod models;
pub mod payload;
pub mod qrcode;
mod ser;
