pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod section;
pub mod unauthorized;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use section::SectionPage;
pub use unauthorized::UnauthorizedPage;
