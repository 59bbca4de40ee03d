pub mod names;
pub mod ws;
