pub mod daily_upload;
pub mod profile;
pub mod session;
