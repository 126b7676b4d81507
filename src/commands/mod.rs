//! CLI commands for arrakis

pub mod bench;
pub mod connected;
pub mod dispatch;
pub mod explore;
pub mod helpers;
pub mod init;
pub mod map;
pub mod path;
pub mod render;
pub mod routes;
pub mod tour;
