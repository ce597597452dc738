pub mod image_generation;
pub mod llm;
pub mod stock_photo;
