//! State model for the teacher-to-{subject, classroom} allocation boards.
//!
//! Both boards share the same shape: a selected teacher drives a dependent
//! fetch of that teacher's current allocations, creates go through the
//! server's uniqueness check, and every mutation is followed by an
//! authoritative refetch. Fetches carry a monotonic generation so that a
//! slow response for a superseded selection can never overwrite a newer one.

use std::rc::Rc;

use yew::Reducible;

use shared::{TeacherClassroomAllocation, TeacherSubjectAllocation};

/// An allocation row that can be addressed by its server-assigned id.
pub trait AllocationRecord: Clone {
    fn allocation_id(&self) -> i64;
}

impl AllocationRecord for TeacherSubjectAllocation {
    fn allocation_id(&self) -> i64 {
        self.allocate_subject_id
    }
}

impl AllocationRecord for TeacherClassroomAllocation {
    fn allocation_id(&self) -> i64 {
        self.allocate_classroom_id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AllocationBoard<A> {
    selected_teacher: Option<i64>,
    allocations: Vec<A>,
    generation: u64,
}

impl<A> AllocationBoard<A> {
    pub fn new() -> Self {
        Self {
            selected_teacher: None,
            allocations: Vec::new(),
            generation: 0,
        }
    }
}

impl<A: AllocationRecord> AllocationBoard<A> {
    pub fn selected_teacher(&self) -> Option<i64> {
        self.selected_teacher
    }

    pub fn allocations(&self) -> &[A] {
        &self.allocations
    }

    /// Change the selection. The board empties immediately; the dependent
    /// fetch tagged with `generation` repopulates it on arrival.
    pub fn select_teacher(&mut self, teacher_id: Option<i64>, generation: u64) {
        self.selected_teacher = teacher_id;
        self.allocations.clear();
        self.generation = generation;
    }

    /// Start a post-mutation reload for the current selection. The list is
    /// kept on screen; only the expected generation advances.
    pub fn begin_refresh(&mut self, generation: u64) {
        self.generation = generation;
    }

    /// Apply a fetched allocation list, replacing the board wholesale.
    /// Returns false (and leaves the board untouched) when the response
    /// belongs to a superseded fetch.
    pub fn apply_fetch(&mut self, generation: u64, records: Vec<A>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.allocations = records;
        true
    }

    /// Drop one row ahead of the server delete; the follow-up refetch is
    /// authoritative either way.
    pub fn remove_local(&mut self, allocation_id: i64) {
        self.allocations.retain(|a| a.allocation_id() != allocation_id);
    }
}

impl<A> Default for AllocationBoard<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reducer actions dispatched by the allocation hooks.
pub enum BoardAction<A> {
    Select {
        teacher_id: Option<i64>,
        generation: u64,
    },
    BeginRefresh {
        generation: u64,
    },
    Fetched {
        generation: u64,
        records: Vec<A>,
    },
    RemoveLocal {
        allocation_id: i64,
    },
}

impl<A: AllocationRecord + PartialEq + 'static> Reducible for AllocationBoard<A> {
    type Action = BoardAction<A>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BoardAction::Select {
                teacher_id,
                generation,
            } => next.select_teacher(teacher_id, generation),
            BoardAction::BeginRefresh { generation } => next.begin_refresh(generation),
            BoardAction::Fetched {
                generation,
                records,
            } => {
                if !next.apply_fetch(generation, records) {
                    return self;
                }
            }
            BoardAction::RemoveLocal { allocation_id } => next.remove_local(allocation_id),
        }
        Rc::new(next)
    }
}

/// Board transition after a create attempt: a successful create triggers
/// an authoritative refresh under `generation`; a rejected one (the
/// duplicate-pair case) dispatches nothing, so the board stays as it was.
pub fn action_after_create<A, E>(
    outcome: &Result<(), E>,
    generation: u64,
) -> Option<BoardAction<A>> {
    match outcome {
        Ok(()) => Some(BoardAction::BeginRefresh { generation }),
        Err(_) => None,
    }
}

/// Client-side guard for allocation creation: both select values must be
/// chosen (and numeric) before any network call is made.
pub fn parse_allocation_request(teacher_id: &str, target_id: &str) -> Option<(i64, i64)> {
    let teacher_id = teacher_id.trim().parse::<i64>().ok()?;
    let target_id = target_id.trim().parse::<i64>().ok()?;
    Some((teacher_id, target_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, subject_id: i64) -> TeacherSubjectAllocation {
        TeacherSubjectAllocation {
            allocate_subject_id: id,
            teacher_id: 3,
            subject_id,
            subject_name: format!("subject-{}", subject_id),
        }
    }

    #[test]
    fn selecting_a_teacher_clears_the_board_until_the_fetch_lands() {
        let mut board = AllocationBoard::new();
        board.select_teacher(Some(3), 1);
        assert!(board.apply_fetch(1, vec![record(10, 7)]));
        assert_eq!(board.allocations().len(), 1);

        board.select_teacher(Some(4), 2);
        assert_eq!(board.selected_teacher(), Some(4));
        assert!(board.allocations().is_empty());
    }

    #[test]
    fn stale_fetch_for_a_superseded_selection_is_discarded() {
        let mut board = AllocationBoard::new();
        board.select_teacher(Some(3), 1);
        board.select_teacher(Some(4), 2);

        // Teacher 3's response arrives after teacher 4 was selected.
        assert!(!board.apply_fetch(1, vec![record(10, 7)]));
        assert!(board.allocations().is_empty());

        assert!(board.apply_fetch(2, vec![record(20, 9)]));
        assert_eq!(board.allocations()[0].allocation_id(), 20);
    }

    #[test]
    fn refresh_invalidates_an_in_flight_fetch_without_clearing_rows() {
        let mut board = AllocationBoard::new();
        board.select_teacher(Some(3), 1);
        assert!(board.apply_fetch(1, vec![record(10, 7)]));

        board.begin_refresh(2);
        assert_eq!(board.allocations().len(), 1);
        assert!(!board.apply_fetch(1, vec![]));
        assert!(board.apply_fetch(2, vec![record(10, 7), record(11, 8)]));
        assert_eq!(board.allocations().len(), 2);
    }

    #[test]
    fn rejected_create_produces_no_board_action() {
        let outcome: Result<(), &str> = Err("duplicate pair");
        assert!(action_after_create::<TeacherSubjectAllocation, _>(&outcome, 2).is_none());

        // With nothing to dispatch, the reducer is never invoked and the
        // board keeps its rows and its expected generation.
        let mut board = AllocationBoard::new();
        board.select_teacher(Some(3), 1);
        assert!(board.apply_fetch(1, vec![record(10, 7)]));
        assert_eq!(board.allocations().len(), 1);
        assert!(board.apply_fetch(1, vec![record(10, 7), record(11, 8)]));
    }

    #[test]
    fn successful_create_refreshes_under_the_new_generation() {
        let outcome: Result<(), &str> = Ok(());
        match action_after_create::<TeacherSubjectAllocation, _>(&outcome, 2) {
            Some(BoardAction::BeginRefresh { generation }) => assert_eq!(generation, 2),
            _ => panic!("expected a refresh"),
        }
    }

    #[test]
    fn delete_removes_only_the_matching_row() {
        let mut board = AllocationBoard::new();
        board.select_teacher(Some(3), 1);
        assert!(board.apply_fetch(1, vec![record(10, 7), record(11, 8)]));

        board.remove_local(10);
        assert_eq!(board.allocations().len(), 1);
        assert_eq!(board.allocations()[0].allocation_id(), 11);

        board.remove_local(99);
        assert_eq!(board.allocations().len(), 1);
    }

    #[test]
    fn allocation_request_requires_both_selections() {
        assert_eq!(parse_allocation_request("3", "7"), Some((3, 7)));
        assert_eq!(parse_allocation_request("", "7"), None);
        assert_eq!(parse_allocation_request("3", ""), None);
        assert_eq!(parse_allocation_request("", ""), None);
    }
}
