// Component-based architecture for the InovaView screens

pub mod component;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod register;

pub use component::{Component, ComponentAction};
pub use forgot_password::ForgotPasswordComponent;
pub use home::HomeComponent;
pub use login::LoginComponent;
pub use register::RegisterComponent;
