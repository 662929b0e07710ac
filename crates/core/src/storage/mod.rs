pub mod backend;
pub mod gateway;
