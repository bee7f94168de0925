pub mod use_login;

pub use use_login::{LoginState, UseLoginHandle, use_login};
