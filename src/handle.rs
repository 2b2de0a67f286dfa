use egui::{CursorIcon, Pos2, Sense, Ui, Vec2};

use crate::session::RowId;

/// What the row handles observed while this frame's rows were drawn.
#[derive(Default)]
pub(crate) struct DragFeedback {
    /// Row whose handle was grabbed this frame, if any.
    pub started: Option<RowId>,
    /// Pointer position relative to the row origin when the grab began.
    pub grab_delta: Option<Vec2>,
}

/// The draggable part of a row's ui.
///
/// Hand it the contents to draw for the grab region; the rest of the row
/// stays inert. For the ghost copies drawn while a drag is in progress the
/// handle renders its contents without interaction.
pub struct Handle<'a> {
    pub(crate) row: RowId,
    pub(crate) id: egui::Id,
    pub(crate) ghost: bool,
    pub(crate) feedback: &'a mut DragFeedback,
}

impl<'a> Handle<'a> {
    pub fn ui(self, ui: &mut Ui, contents: impl FnOnce(&mut Ui)) {
        if self.ghost {
            contents(ui);
            return;
        }

        let added = ui.scope(contents);
        let response = ui.interact(added.response.rect, self.id, Sense::drag());

        if response.hovered() {
            ui.output().cursor_icon = CursorIcon::Grab;
        }

        if response.drag_started() {
            // remember where in the row the grab happened so the floating
            // copy stays under the pointer
            let top_left = added.response.rect.min.to_vec2();
            let pointer = response
                .interact_pointer_pos()
                .unwrap_or(Pos2::default())
                .to_vec2();
            self.feedback.started = Some(self.row);
            self.feedback.grab_delta = Some(top_left - pointer);
        }
    }
}
