use crate::utils::move_row;

/// Identifier a row gets from its position in the saved order at the moment
/// the working copy was captured.
///
/// Ids are unique within one working copy and stable for the duration of a
/// single drag session. They are re-derived whenever the saved order changes
/// outside of a drag, so they must not be persisted across renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowId(pub usize);

/// An item paired with its snapshot identifier.
#[derive(Clone, Debug)]
pub struct Row<T> {
    pub id: RowId,
    pub data: T,
}

/// Input events driving a [`ReorderSession`], in the order the rendering
/// surface observed them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEvent {
    /// A drag began on the given row.
    Start { row: RowId },
    /// The pointer crossed into a row while dragging.
    Enter { row: RowId },
    /// Drag-leave. `inside` tells whether the pointer is still within the
    /// container bounds; leaving the container cancels the session.
    Leave { inside: bool },
    /// The pointer was released. `inside` tells whether the drop landed
    /// within the container bounds; only an inside drop commits.
    Drop { inside: bool },
    /// The drag ended without a drop (escape, focus loss).
    End,
}

/// One in-progress drag gesture: the dragged row, the index it was last
/// moved to, and the mutated order accumulated so far.
#[derive(Clone, Debug)]
struct DragSession<T> {
    dragged: RowId,
    hover: Option<usize>,
    working: Vec<Row<T>>,
}

enum State<T> {
    Idle,
    Dragging(DragSession<T>),
}

/// Tracks a reorderable list through drag gestures.
///
/// The caller's saved order stays authoritative: while no drag is active the
/// session is a plain projection of it, and every terminal event either
/// commits the full mutated order or reverts to the saved order. There is no
/// in-between state to observe.
///
/// The session never inspects item contents and never touches coordinates;
/// the rendering surface resolves pointer positions to row ids before
/// feeding events in.
pub struct ReorderSession<T> {
    state: State<T>,
}

impl<T> Default for ReorderSession<T> {
    fn default() -> Self {
        Self { state: State::Idle }
    }
}

impl<T: Clone> ReorderSession<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging(_))
    }

    /// Row currently being dragged, if any.
    pub fn dragged_row(&self) -> Option<RowId> {
        match &self.state {
            State::Dragging(session) => Some(session.dragged),
            State::Idle => None,
        }
    }

    /// Index the dragged row was last moved to, if any row has been crossed
    /// since the drag began.
    pub fn hover_index(&self) -> Option<usize> {
        match &self.state {
            State::Dragging(session) => session.hover,
            State::Idle => None,
        }
    }

    /// The working order as `(id, item)` pairs in display order: a projection
    /// of `saved` while idle, the session's own snapshot while dragging.
    pub fn rows<'a>(&'a self, saved: &'a [T]) -> Vec<(RowId, &'a T)> {
        match &self.state {
            State::Idle => saved
                .iter()
                .enumerate()
                .map(|(index, data)| (RowId(index), data))
                .collect(),
            State::Dragging(session) => session
                .working
                .iter()
                .map(|row| (row.id, &row.data))
                .collect(),
        }
    }

    /// Apply one event. Returns the committed item order on a valid drop;
    /// every other event returns `None`. Anomalous events (unknown row ids,
    /// events with no active session, drags on an empty list) are no-ops.
    pub fn apply(&mut self, saved: &[T], event: DragEvent) -> Option<Vec<T>> {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("reorder_event", ?event, dragging = self.is_dragging()).entered();

        let state = std::mem::replace(&mut self.state, State::Idle);
        let (state, committed) = step(state, saved, event);
        self.state = state;
        committed
    }
}

/// Pure transition function. Mutating the caller's list and invoking its
/// reorder callback stay outside; a commit is reported back as data.
fn step<T: Clone>(
    state: State<T>,
    saved: &[T],
    event: DragEvent,
) -> (State<T>, Option<Vec<T>>) {
    match (state, event) {
        (State::Idle, DragEvent::Start { row }) => {
            if row.0 >= saved.len() {
                return (State::Idle, None);
            }
            // snapshot the working order; the session owns it from here on
            let working = saved
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, data)| Row {
                    id: RowId(index),
                    data,
                })
                .collect();
            (
                State::Dragging(DragSession {
                    dragged: row,
                    hover: None,
                    working,
                }),
                None,
            )
        }
        (State::Dragging(mut session), DragEvent::Enter { row }) => {
            if row != session.dragged {
                if let Some(to) = session.working.iter().position(|r| r.id == row) {
                    // unchanged hover index means hover jitter, not a move
                    if session.hover != Some(to) {
                        if let Some(from) =
                            session.working.iter().position(|r| r.id == session.dragged)
                        {
                            move_row(from, to, &mut session.working);
                            session.hover = Some(to);
                        }
                    }
                }
            }
            (State::Dragging(session), None)
        }
        (State::Dragging(session), DragEvent::Leave { inside: true }) => {
            (State::Dragging(session), None)
        }
        (State::Dragging(_), DragEvent::Leave { inside: false }) => (State::Idle, None),
        (State::Dragging(session), DragEvent::Drop { inside: true }) => {
            let order = session.working.into_iter().map(|row| row.data).collect();
            (State::Idle, Some(order))
        }
        (State::Dragging(_), DragEvent::Drop { inside: false }) => (State::Idle, None),
        (State::Dragging(_), DragEvent::End) => (State::Idle, None),
        // anything else: events with no active session, or a second Start
        // arriving mid-drag
        (state, _) => (state, None),
    }
}
