pub mod generate_image;
