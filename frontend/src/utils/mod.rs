pub mod redirect;
pub mod storage;
pub mod time;
