pub mod converter;
pub mod helpers;
pub mod menu_bar;
pub mod status;
