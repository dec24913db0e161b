pub mod acquire;
pub mod client;
pub mod config;
pub mod consts;
pub mod error;
pub mod listener;
pub mod selection;
pub mod state;
pub mod submit;
