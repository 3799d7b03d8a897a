pub mod classify;
pub mod clock;
pub mod pipeline;
pub mod season;
pub mod seed;
pub mod template;
pub mod validate;
