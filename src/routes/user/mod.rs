pub mod create;
pub mod directory;
pub mod follow;
pub mod password;
