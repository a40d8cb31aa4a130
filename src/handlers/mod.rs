pub mod hello;
pub mod details;

pub use hello::hello_handler;
pub use details::details_handler;
