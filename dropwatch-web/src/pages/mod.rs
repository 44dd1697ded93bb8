mod admin_dashboard;
mod admin_submissions;
mod analytics;
mod at_risk;
mod auth_callback;
mod contact;
mod counselor;
mod dashboard;
mod forgot_password;
mod home;
mod login;
mod predict;
mod reset_password;
mod services;
mod signup;
mod welcome;

pub use admin_dashboard::AdminDashboardPage;
pub use admin_submissions::AdminSubmissionsPage;
pub use analytics::AnalyticsPage;
pub use at_risk::AtRiskPage;
pub use auth_callback::AuthCallbackPage;
pub use contact::ContactPage;
pub use counselor::CounselorPage;
pub use dashboard::DashboardPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use predict::PredictPage;
pub use reset_password::ResetPasswordPage;
pub use services::ServicesPage;
pub use signup::SignupPage;
pub use welcome::WelcomePage;
