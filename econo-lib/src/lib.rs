#[macro_use]
extern crate actix_web;

pub mod category;
pub mod config;
pub mod entry;
pub mod entry_tag;
mod error;
pub mod tag;
pub mod tracing;
pub mod user;
