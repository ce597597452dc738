pub mod search_photo;
