//! UI components

pub mod dashboard;
pub mod login_page;
pub mod protected_page;
pub mod spinner;

pub use dashboard::Dashboard;
pub use login_page::LoginPage;
pub use protected_page::ProtectedPage;
pub use spinner::LoadingSpinner;
