pub mod availability;
pub mod composer;
pub mod content;
pub mod pages;
