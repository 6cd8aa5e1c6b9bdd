pub mod health;
pub mod weight_entries;
