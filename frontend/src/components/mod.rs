pub mod auth;
pub mod daily;
pub mod onboarding;
