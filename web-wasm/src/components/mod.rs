pub mod action_buttons;
pub mod alert_box;
pub mod busy_indicator;
pub mod header;
pub mod results_panel;
pub mod upload_area;
