//! HTTP request handlers

pub mod calculate;
pub mod chat;
pub mod cities;
pub mod forecast;
pub mod health;
pub mod index;
pub mod predict;
