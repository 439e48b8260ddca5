pub mod filter_panel;
pub mod modal_frame;
pub mod search_input;
pub mod show_more_controls;
pub mod sortable_header_cell;
pub mod stat_card;
