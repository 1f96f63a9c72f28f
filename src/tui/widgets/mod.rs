// TUI widget modules for each portal panel.

pub mod comments;
pub mod content;
pub mod help_bar;
pub mod menu_bar;
pub mod quit_confirm;
pub mod sidebar;
pub mod title_bar;
