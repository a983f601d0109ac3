pub mod dev;
pub mod new;
