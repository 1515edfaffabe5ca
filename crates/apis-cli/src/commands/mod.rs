pub mod advise;
pub mod alert;
pub mod apiary;
pub mod dispatch;
pub mod hive;
pub mod init;
pub mod inspection;
pub mod recommendation;
pub mod shared;
pub mod task;
