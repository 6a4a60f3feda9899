pub mod database_service;

mod follower;
mod publication;
mod user;
