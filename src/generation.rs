pub mod builders;
pub mod catalog;
pub mod fixture;
pub mod generate;
