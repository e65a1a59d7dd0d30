pub mod deck;
pub mod generate;
pub mod health;
pub mod index;
pub mod page;
