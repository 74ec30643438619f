pub mod cli;
pub mod initializers;
pub mod table;
pub mod utils;
