pub mod health;
pub mod taxonomies;
pub mod wizards;
