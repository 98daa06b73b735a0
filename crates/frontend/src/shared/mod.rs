pub mod api;
pub mod confirm_modal;
pub mod date_utils;
pub mod icons;
pub mod image;
pub mod list_controller;
pub mod list_utils;
pub mod notifications;
