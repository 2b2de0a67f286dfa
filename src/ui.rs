use egui::{self, Area, CursorIcon, Key, Order, Pos2, Rect, Response, Sense, Shape, Ui, Vec2};

use crate::handle::{DragFeedback, Handle};
use crate::session::{DragEvent, ReorderSession, RowId};

/// Behaviour knobs for [`ReorderUi`].
#[derive(Clone, Debug)]
pub struct ReorderConfig {
    /// Whether pressing Escape cancels an active drag (default: true).
    pub cancel_on_escape: bool,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            cancel_on_escape: true,
        }
    }
}

impl ReorderConfig {
    /// Config where Escape does not cancel drags.
    #[must_use]
    pub fn no_escape_cancel(mut self) -> Self {
        self.cancel_on_escape = false;
        self
    }
}

/// Presentational state handed to the row ui closure alongside each item.
///
/// `is_ghost` marks the row currently being dragged; the caller decides how
/// a ghost row looks, the controller only flags it.
#[derive(Clone, Copy, Debug)]
pub struct RowState {
    pub id: RowId,
    /// Position of the row in the current working order.
    pub index: usize,
    pub is_ghost: bool,
}

/// What happened inside [`ReorderUi::ui`] this frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReorderResponse {
    /// No drag in progress.
    Idle,
    /// A drag is in progress; the working order may differ from the saved
    /// order until it ends.
    Dragging {
        dragged: RowId,
        hover: Option<usize>,
    },
    /// A drop landed inside the container; the reorder callback was invoked
    /// with the new item order.
    Committed,
    /// The drag ended without a valid drop; the list reverted to the saved
    /// order and the callback was not invoked.
    Cancelled,
}

/// Drag-to-reorder state for one list. Hold on to it across frames and call
/// [`ReorderUi::ui`] with the current saved order every frame.
///
/// The saved order stays authoritative: a new order is only reported through
/// the reorder callback on a drop inside the container, and any cancelled
/// drag reverts the list to the saved order. The callback receives plain
/// items in their final sequence.
///
/// # Example
/// ```no_run
/// use eframe::egui::{CentralPanel, Context};
/// use eframe::{App, Frame, NativeOptions};
/// use egui_reorder::ReorderUi;
///
/// struct RuntimeList {
///     runtimes: Vec<String>,
///     reorder: ReorderUi<String>,
/// }
///
/// impl App for RuntimeList {
///     fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
///         CentralPanel::default().show(ctx, |ui| {
///             let mut committed = None;
///             self.reorder.ui(
///                 ui,
///                 &self.runtimes,
///                 |order| committed = Some(order),
///                 |ui, handle, _row, item| {
///                     ui.horizontal(|ui| {
///                         handle.ui(ui, |ui| {
///                             ui.label("::");
///                         });
///                         ui.label(item);
///                     });
///                 },
///             );
///             if let Some(order) = committed {
///                 self.runtimes = order;
///             }
///         });
///     }
/// }
///
/// pub fn main() {
///     eframe::run_native(
///         "Reorder",
///         NativeOptions::default(),
///         Box::new(|_| {
///             Box::new(RuntimeList {
///                 runtimes: vec!["a".to_string(), "b".to_string(), "c".to_string()],
///                 reorder: ReorderUi::new(),
///             })
///         }),
///     );
/// }
/// ```
pub struct ReorderUi<T> {
    session: ReorderSession<T>,
    config: ReorderConfig,
    /// Grab offset within the dragged row, captured at drag start.
    grab_delta: Option<Vec2>,
}

impl<T> Default for ReorderUi<T> {
    fn default() -> Self {
        Self {
            session: ReorderSession::default(),
            config: ReorderConfig::default(),
            grab_delta: None,
        }
    }
}

impl<T: Clone> ReorderUi<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReorderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// Draw the list and advance the drag session with this frame's input.
    ///
    /// `row_ui` draws one row; it gets a [`Handle`] for the grab region and a
    /// [`RowState`] describing the row. `on_reorder` is invoked with the
    /// final item order when a drag commits, and not otherwise.
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        saved: &[T],
        mut on_reorder: impl FnMut(Vec<T>),
        mut row_ui: impl FnMut(&mut Ui, Handle<'_>, RowState, &T),
    ) -> ReorderResponse {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "reorder_ui",
            rows = saved.len(),
            dragging = self.session.is_dragging()
        )
        .entered();

        let mut feedback = DragFeedback::default();
        let mut row_rects: Vec<(RowId, Rect)> = Vec::new();
        let dragged = self.session.dragged_row();
        let grab_delta = self.grab_delta;

        let session = &self.session;
        let list_response = draw_list(ui, session.is_dragging(), |ui| {
            for (index, (row, item)) in session.rows(saved).into_iter().enumerate() {
                let is_ghost = dragged == Some(row);
                let rect = draw_row(ui, row, is_ghost, grab_delta, &mut feedback, |ui, handle| {
                    row_ui(
                        ui,
                        handle,
                        RowState {
                            id: row,
                            index,
                            is_ghost,
                        },
                        item,
                    );
                });
                row_rects.push((row, rect));
            }
        });

        // translate this frame's input into session events
        if let Some(row) = feedback.started {
            self.grab_delta = feedback.grab_delta;
            self.session.apply(saved, DragEvent::Start { row });
        }

        if !self.session.is_dragging() {
            return ReorderResponse::Idle;
        }

        if self.config.cancel_on_escape && ui.input().key_pressed(Key::Escape) {
            self.session.apply(saved, DragEvent::End);
            return ReorderResponse::Cancelled;
        }

        let container_rect = list_response.rect;
        let pointer = ui.input().pointer.hover_pos();

        if ui.input().pointer.any_released() {
            let inside = pointer.map_or(false, |pos| container_rect.contains(pos));
            return match self.session.apply(saved, DragEvent::Drop { inside }) {
                Some(order) => {
                    on_reorder(order);
                    ReorderResponse::Committed
                }
                None => ReorderResponse::Cancelled,
            };
        }

        if let Some(pos) = pointer {
            if container_rect.contains(pos) {
                if let Some(row) = row_under_pointer(&row_rects, pos) {
                    self.session.apply(saved, DragEvent::Enter { row });
                }
            } else {
                self.session.apply(saved, DragEvent::Leave { inside: false });
            }
        }

        match self.session.dragged_row() {
            Some(dragged) => ReorderResponse::Dragging {
                dragged,
                hover: self.session.hover_index(),
            },
            None => ReorderResponse::Cancelled,
        }
    }
}

/// Resolve the row under the pointer by containment in the rows' rects.
fn row_under_pointer(rects: &[(RowId, Rect)], pointer: Pos2) -> Option<RowId> {
    rects
        .iter()
        .find(|(_, rect)| rect.contains(pointer))
        .map(|(row, _)| *row)
}

/// Draw the list container and return its response. The background switches
/// to the active widget visuals while the container is the hovered drop
/// target of an in-progress drag.
fn draw_list(ui: &mut Ui, drag_active: bool, list_body: impl FnOnce(&mut Ui)) -> Response {
    let margin = Vec2::splat(4.0);

    let outer_bounds = ui.available_rect_before_wrap();
    let background = ui.painter().add(Shape::Noop);

    let mut content_ui = ui.child_ui(outer_bounds.shrink2(margin), *ui.layout());
    list_body(&mut content_ui);

    let outer_rect = Rect::from_min_max(outer_bounds.min, content_ui.min_rect().max + margin);
    let (rect, response) = ui.allocate_at_least(outer_rect.size(), Sense::hover());

    let style = if drag_active && response.hovered() {
        ui.visuals().widgets.active
    } else {
        ui.visuals().widgets.inactive
    };

    ui.painter().set(
        background,
        epaint::RectShape {
            rounding: style.rounding,
            fill: style.bg_fill,
            stroke: style.bg_stroke,
            rect,
        },
    );

    response
}

/// Draw one row and return the rect it occupies in the list.
///
/// The dragged row is drawn twice: a floating copy pinned to the pointer on
/// a layer above the list, and a disabled placeholder holding its slot. Both
/// copies get an inert handle.
fn draw_row(
    ui: &mut Ui,
    row: RowId,
    is_ghost: bool,
    grab_delta: Option<Vec2>,
    feedback: &mut DragFeedback,
    mut contents: impl FnMut(&mut Ui, Handle<'_>),
) -> Rect {
    let id = ui.id().with(row);

    if !is_ghost {
        let scope = ui.scope(|ui| {
            contents(
                ui,
                Handle {
                    row,
                    id,
                    ghost: false,
                    feedback,
                },
            );
        });
        return scope.response.rect;
    }

    ui.output().cursor_icon = CursorIcon::Grabbing;

    // a dragged row cannot be interacted with anyway, so it can follow the
    // pointer on the tooltip layer without stealing input
    let pointer_pos = ui
        .ctx()
        .pointer_interact_pos()
        .unwrap_or(ui.next_widget_position());

    Area::new(id.with("floating"))
        .order(Order::Tooltip)
        .interactable(false)
        .fixed_pos(pointer_pos + grab_delta.unwrap_or(Vec2::default()))
        .show(ui.ctx(), |ui| {
            ui.scope(|ui| {
                contents(
                    ui,
                    Handle {
                        row,
                        id,
                        ghost: true,
                        feedback: &mut *feedback,
                    },
                );
            });
        });

    // disabled placeholder keeps the row's slot in the list
    let scope = ui.scope(|ui| {
        ui.add_enabled_ui(false, |ui| {
            contents(
                ui,
                Handle {
                    row,
                    id,
                    ghost: true,
                    feedback: &mut *feedback,
                },
            );
        });
    });
    scope.response.rect
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f32) -> Rect {
        Rect::from_min_max(egui::pos2(0.0, top), egui::pos2(100.0, top + 20.0))
    }

    #[test]
    fn pointer_resolves_to_the_containing_row() {
        let rects = vec![
            (RowId(0), rect(0.0)),
            (RowId(1), rect(25.0)),
            (RowId(2), rect(50.0)),
        ];
        assert_eq!(
            row_under_pointer(&rects, egui::pos2(50.0, 30.0)),
            Some(RowId(1))
        );
        assert_eq!(
            row_under_pointer(&rects, egui::pos2(50.0, 55.0)),
            Some(RowId(2))
        );
    }

    #[test]
    fn pointer_outside_every_row_resolves_to_none() {
        let rects = vec![(RowId(0), rect(0.0))];
        assert_eq!(row_under_pointer(&rects, egui::pos2(50.0, 100.0)), None);
        assert_eq!(row_under_pointer(&[], egui::pos2(0.0, 0.0)), None);
    }

    #[test]
    fn escape_cancel_is_on_by_default() {
        assert!(ReorderConfig::default().cancel_on_escape);
        assert!(!ReorderConfig::default().no_escape_cancel().cancel_on_escape);
    }
}
