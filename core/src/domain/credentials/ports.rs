use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, credentials::value_objects::UpdateApiKeysInput,
};

/// Service trait for inspecting and replacing provider credentials
#[cfg_attr(test, mockall::automock)]
pub trait CredentialService: Send + Sync {
    fn check_api_keys(&self) -> impl Future<Output = bool> + Send;

    fn update_api_keys(
        &self,
        input: UpdateApiKeysInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
