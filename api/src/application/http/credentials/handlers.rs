pub mod check_api_keys;
pub mod update_api_keys;
