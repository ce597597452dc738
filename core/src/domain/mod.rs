pub mod common;
pub mod credentials;
pub mod image_generation;
pub mod menu_analysis;
pub mod stock_photo;
