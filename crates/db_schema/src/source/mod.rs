pub mod community;
pub mod person;
