pub mod error;
pub mod publication;
pub mod response;
pub mod token;
pub mod user;
