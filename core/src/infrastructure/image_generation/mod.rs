pub mod fal_client;

pub use fal_client::FalImageClient;
