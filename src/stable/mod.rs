pub mod natural_merge;
