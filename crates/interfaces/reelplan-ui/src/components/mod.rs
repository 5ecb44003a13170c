pub mod header;
pub mod idea_bar;
pub mod sidebar;
