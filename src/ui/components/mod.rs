pub mod customer_list;
pub mod customer_table;
pub mod dropdown;
pub mod pagination_bar;
pub mod stat_card;
