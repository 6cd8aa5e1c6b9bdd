pub mod weight_entry;
