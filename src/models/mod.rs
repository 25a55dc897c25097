pub mod content;
pub mod country;
pub mod demo;
pub mod quote;
