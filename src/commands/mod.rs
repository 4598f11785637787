pub mod init;
pub mod like;
pub mod list;
pub mod post;
pub mod reset;
