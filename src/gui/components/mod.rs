// src/gui/components/mod.rs
pub mod card_list;
pub mod data_table;
pub mod search_bar;
pub mod tabs;
pub mod top_bar;
