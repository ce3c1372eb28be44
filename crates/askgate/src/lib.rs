pub mod assembler;
pub mod errors;
pub mod image;
pub mod models;
pub mod providers;
pub mod tools;
