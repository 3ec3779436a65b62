pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod pages;
pub mod review;
