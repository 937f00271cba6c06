//! View components for the application.

pub mod dashboard;
pub mod not_found;

pub use dashboard::Dashboard;
pub use not_found::PageNotFound;
