pub mod ui_state;
