pub mod bar;
pub mod constant;
pub mod request;
