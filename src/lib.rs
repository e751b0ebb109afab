pub mod catalog;
pub mod classify;
pub mod encode;
pub mod http_client;
pub mod probe;
pub mod report;
