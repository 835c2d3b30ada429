//! Command implementations

pub mod init;
