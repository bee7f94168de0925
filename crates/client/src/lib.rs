//! Rota portal HTTP client and login flow

pub mod client;
pub mod error;
pub mod flow;
pub mod login;

pub use client::{PortalClient, PortalClientBuilder};
pub use error::ClientError;
pub use flow::LoginFlow;
pub use login::LoginApi;
