pub mod chooser_mode;
pub mod command_mode;
pub mod confirm_mode;
pub mod form_mode;
pub mod normal_mode;
pub mod visual_mode;
