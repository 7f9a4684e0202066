pub mod app;
pub mod color;
pub mod components;
pub mod config;
pub mod contact;
pub mod content;
pub mod dom;
pub mod error;
pub mod icons;
pub mod motion;
pub mod pages;
pub mod schema;
pub mod seo;
pub mod sitemap;
