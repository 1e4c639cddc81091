pub mod cloud;
pub mod home;
pub mod not_found;
