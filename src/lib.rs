pub mod cli;
pub mod dataset;
pub mod handlers;
pub mod http;
pub mod init;
pub mod markup;
pub mod models;
pub mod normalize;
pub mod repl;
pub mod search;
