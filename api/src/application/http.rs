pub mod credentials;
pub mod health;
pub mod image_generation;
pub mod menu_analysis;
pub mod server;
pub mod stock_photo;
