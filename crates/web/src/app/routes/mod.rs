pub mod home;
pub mod system;
