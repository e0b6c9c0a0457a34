pub mod action_menu;
pub mod action_prompt;
pub mod cells;
pub mod entity_table;
pub mod filter_panel;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod ui;

pub use entity_table::{Column, EntityTable, EntityView};
pub use stat_card::StatCard;
pub use ui::{Badge, StatusBadge};
