pub mod read;
pub mod todo;
pub mod user;
