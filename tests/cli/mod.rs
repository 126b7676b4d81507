pub mod support;

mod bench;
mod init;
mod map;
mod path;
mod render;
mod routes;
mod traversal;
