pub mod aggregate;
pub mod categories;
pub mod driver;
pub mod errors;
pub mod groups;
mod information;
pub mod input;
pub mod output;
pub mod stack;
pub mod xlsx;
