//! Login endpoint

use crate::client::PortalClient;
use crate::error::ClientError;
use async_trait::async_trait;
use rota_core::{Credentials, LoginReply, LoginRequest};
use tracing::debug;

/// Something that can exchange credentials for a login reply.
///
/// Futures are not `Send` so the same implementation runs in the browser.
#[async_trait(?Send)]
pub trait LoginApi {
    /// Send one login request and return the raw reply.
    ///
    /// `Err` means no reply was received at all; any HTTP status, including
    /// errors, comes back as `Ok`.
    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, ClientError>;
}

#[async_trait(?Send)]
impl LoginApi for PortalClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, ClientError> {
        let request = self
            .request(reqwest::Method::POST, self.login_endpoint())
            .json(&LoginRequest::from(credentials));

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, username = %credentials.username, "Login endpoint replied");

        Ok(LoginReply::new(status, body))
    }
}

#[async_trait(?Send)]
impl<T: LoginApi + ?Sized> LoginApi for std::rc::Rc<T> {
    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, ClientError> {
        (**self).login(credentials).await
    }
}
