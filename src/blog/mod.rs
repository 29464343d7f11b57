pub mod catalog;
pub mod editor;
pub mod feed;
pub mod models;
pub mod seed;
pub mod thread;
