pub mod docs;
pub mod gauge;
pub mod input_panel;
pub mod options_panel;
pub mod result_panel;
