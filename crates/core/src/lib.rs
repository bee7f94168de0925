//! Rota portal core types
//!
//! Everything here is free of I/O: the login exchange is classified from a
//! status and body, the session lives behind [`KeyValueStorage`], and page
//! moves go through [`Navigator`]. The browser app and the CLI plug their
//! own storage and navigation in.

pub mod config;
pub mod credentials;
pub mod error;
pub mod guard;
pub mod login;
pub mod navigation;
pub mod role;
pub mod session;

pub use config::{ApiConfig, PortalConfig, RouteConfig, StorageKeys};
pub use credentials::{Credentials, LoginForm};
pub use error::{StorageError, StorageResult};
pub use guard::{AccessPolicy, GuardDecision};
pub use login::{LoginError, LoginReply, LoginRequest, LoginResponse};
pub use navigation::{Navigator, RecordingNavigator};
pub use role::{Role, UnknownRole};
pub use session::{KeyValueStorage, MemoryStorage, Session, SessionStore};
