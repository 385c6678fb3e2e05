pub mod init;
pub mod scenarios;
pub mod simulate;
