pub mod category;
pub mod request;
pub mod result;
