pub mod check;
pub mod configs;
