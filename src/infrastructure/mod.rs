pub mod dom;
pub mod http;
pub mod rendering;
pub mod services;
