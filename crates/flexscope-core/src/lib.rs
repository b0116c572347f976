pub mod config;
pub mod console;
pub mod consts;
pub mod error;
pub mod gallery;
pub mod input;
pub mod script;
pub mod viewport;
