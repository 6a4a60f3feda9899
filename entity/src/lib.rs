pub mod follower;
pub mod publication;
pub mod user;

/*
 Users post publications and follow each other.
 A follow row is (followed_id, follower_id); the pair is the primary key so the
 same edge can only exist once. Deleting a user takes their publications and
 every edge they appear in with them (ON DELETE CASCADE on all three FKs).
 */
