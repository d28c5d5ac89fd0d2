pub mod delete_confirmation;
pub mod event_form;
pub mod help;
pub mod task_form;
pub mod type_chooser;

use ratatui::layout::Rect;

/// Rectangle of the given size centred in `area`, clipped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
