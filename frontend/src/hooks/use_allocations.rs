use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::{
    Classroom, NewClassroomAllocation, NewSubjectAllocation, Subject, Teacher,
    TeacherClassroomAllocation, TeacherSubjectAllocation,
};

use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;
use crate::services::notify::Notifier;
use crate::state::allocation::{
    action_after_create, parse_allocation_request, AllocationBoard, BoardAction,
};

/// The two allocation boards differ only in their target entity, their
/// endpoints, and their notification texts. This trait is that difference.
pub trait AllocationApi: Clone + PartialEq + 'static {
    type Target: Clone + PartialEq + 'static;
    type Record: crate::state::allocation::AllocationRecord + PartialEq + 'static;

    const COMPONENT: &'static str;
    const SUCCESS_MESSAGE: &'static str;
    const DUPLICATE_MESSAGE: &'static str;
    const MISSING_SELECTION_MESSAGE: &'static str;

    fn client(&self) -> &ApiClient;
    async fn list_targets(&self) -> Result<Vec<Self::Target>, ApiError>;
    async fn allocations_for_teacher(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<Self::Record>, ApiError>;
    async fn create(&self, teacher_id: i64, target_id: i64) -> Result<(), ApiError>;
    async fn delete(&self, allocation_id: i64) -> Result<(), ApiError>;
}

#[derive(Clone, PartialEq)]
pub struct SubjectAllocationApi {
    pub api: ApiClient,
}

impl AllocationApi for SubjectAllocationApi {
    type Target = Subject;
    type Record = TeacherSubjectAllocation;

    const COMPONENT: &'static str = "allocate_subjects";
    const SUCCESS_MESSAGE: &'static str = "Subject allocated successfully!";
    const DUPLICATE_MESSAGE: &'static str = "Subject already allocated to teacher";
    const MISSING_SELECTION_MESSAGE: &'static str =
        "Please select both teacher and subject to allocate.";

    fn client(&self) -> &ApiClient {
        &self.api
    }

    async fn list_targets(&self) -> Result<Vec<Subject>, ApiError> {
        self.api.list_subjects().await
    }

    async fn allocations_for_teacher(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeacherSubjectAllocation>, ApiError> {
        self.api.subject_allocations_for_teacher(teacher_id).await
    }

    async fn create(&self, teacher_id: i64, target_id: i64) -> Result<(), ApiError> {
        self.api
            .create_subject_allocation(&NewSubjectAllocation {
                teacher_id,
                subject_id: target_id,
            })
            .await
    }

    async fn delete(&self, allocation_id: i64) -> Result<(), ApiError> {
        self.api.delete_subject_allocation(allocation_id).await
    }
}

#[derive(Clone, PartialEq)]
pub struct ClassroomAllocationApi {
    pub api: ApiClient,
}

impl AllocationApi for ClassroomAllocationApi {
    type Target = Classroom;
    type Record = TeacherClassroomAllocation;

    const COMPONENT: &'static str = "allocate_classrooms";
    const SUCCESS_MESSAGE: &'static str = "Classroom allocated successfully!";
    const DUPLICATE_MESSAGE: &'static str = "Class already allocated for teacher";
    const MISSING_SELECTION_MESSAGE: &'static str =
        "Please select both teacher and classroom to allocate.";

    fn client(&self) -> &ApiClient {
        &self.api
    }

    async fn list_targets(&self) -> Result<Vec<Classroom>, ApiError> {
        self.api.list_classrooms().await
    }

    async fn allocations_for_teacher(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeacherClassroomAllocation>, ApiError> {
        self.api.classroom_allocations_for_teacher(teacher_id).await
    }

    async fn create(&self, teacher_id: i64, target_id: i64) -> Result<(), ApiError> {
        self.api
            .create_classroom_allocation(&NewClassroomAllocation {
                teacher_id,
                classroom_id: target_id,
            })
            .await
    }

    async fn delete(&self, allocation_id: i64) -> Result<(), ApiError> {
        self.api.delete_classroom_allocation(allocation_id).await
    }
}

#[derive(Clone, PartialEq)]
pub struct AllocationsState<P: AllocationApi> {
    pub teachers: Vec<Teacher>,
    pub targets: Vec<P::Target>,
    pub allocations: Vec<P::Record>,
    pub teacher_choice: String,
    pub target_choice: String,
}

#[derive(Clone)]
pub struct UseAllocationsActions {
    pub select_teacher: Callback<String>,
    pub set_target: Callback<String>,
    pub allocate: Callback<()>,
    pub delete: Callback<i64>,
}

pub struct UseAllocationsResult<P: AllocationApi> {
    pub state: AllocationsState<P>,
    pub actions: UseAllocationsActions,
}

fn bump(counter: &Rc<RefCell<u64>>) -> u64 {
    let mut generation = counter.borrow_mut();
    *generation += 1;
    *generation
}

/// Fetch a teacher's allocations and apply them under `generation`.
/// Transport errors degrade to an empty board: logged, not surfaced.
async fn load_allocations<P: AllocationApi>(
    provider: P,
    board: UseReducerHandle<AllocationBoard<P::Record>>,
    generation: u64,
    teacher_id: i64,
) {
    let records = match provider.allocations_for_teacher(teacher_id).await {
        Ok(records) => records,
        Err(e) => {
            Logger::error_with_component(
                P::COMPONENT,
                &format!("Failed to fetch allocations for teacher {}: {}", teacher_id, e),
            );
            Vec::new()
        }
    };
    board.dispatch(BoardAction::Fetched { generation, records });
}

#[hook]
pub fn use_allocations<P: AllocationApi>(
    provider: P,
    notifier: Notifier,
) -> UseAllocationsResult<P> {
    let teachers = use_state(Vec::<Teacher>::new);
    let targets = use_state(Vec::<P::Target>::new);
    let board = use_reducer(AllocationBoard::<P::Record>::new);
    let teacher_choice = use_state(String::new);
    let target_choice = use_state(String::new);
    let generation = use_mut_ref(|| 0u64);

    // Load the teacher and target dropdowns once on mount.
    use_effect_with((), {
        let provider = provider.clone();
        let teachers = teachers.clone();
        let targets = targets.clone();
        move |_| {
            let fetched_teachers = teachers;
            let fetched_targets = targets;
            spawn_local(async move {
                match provider.client().list_teachers().await {
                    Ok(list) => fetched_teachers.set(list),
                    Err(e) => Logger::error_with_component(
                        P::COMPONENT,
                        &format!("Failed to fetch teachers: {}", e),
                    ),
                }
                match provider.list_targets().await {
                    Ok(list) => fetched_targets.set(list),
                    Err(e) => Logger::error_with_component(
                        P::COMPONENT,
                        &format!("Failed to fetch targets: {}", e),
                    ),
                }
            });
            || ()
        }
    });

    let select_teacher = {
        let provider = provider.clone();
        let board = board.clone();
        let teacher_choice = teacher_choice.clone();
        let generation = generation.clone();

        Callback::from(move |value: String| {
            teacher_choice.set(value.clone());
            let teacher_id = value.trim().parse::<i64>().ok();
            let fetch_generation = bump(&generation);
            board.dispatch(BoardAction::Select {
                teacher_id,
                generation: fetch_generation,
            });

            if let Some(teacher_id) = teacher_id {
                let provider = provider.clone();
                let board = board.clone();
                spawn_local(async move {
                    load_allocations(provider, board, fetch_generation, teacher_id).await;
                });
            }
        })
    };

    let set_target = {
        let target_choice = target_choice.clone();
        Callback::from(move |value: String| {
            target_choice.set(value);
        })
    };

    let allocate = {
        let provider = provider.clone();
        let notifier = notifier.clone();
        let board = board.clone();
        let teacher_choice = teacher_choice.clone();
        let target_choice = target_choice.clone();
        let generation = generation.clone();

        Callback::from(move |_| {
            let Some((teacher_id, target_id)) =
                parse_allocation_request(&teacher_choice, &target_choice)
            else {
                // Blocking guard: no network call without both selections.
                gloo::dialogs::alert(P::MISSING_SELECTION_MESSAGE);
                return;
            };

            let provider = provider.clone();
            let notifier = notifier.clone();
            let board = board.clone();
            let target_choice = target_choice.clone();
            let generation = generation.clone();

            spawn_local(async move {
                let outcome = provider.create(teacher_id, target_id).await;
                match &outcome {
                    Ok(()) => {
                        notifier.success(P::SUCCESS_MESSAGE);
                        target_choice.set(String::new());
                    }
                    Err(e) => {
                        // Duplicate (teacher, target) pair; local state untouched.
                        notifier.error(P::DUPLICATE_MESSAGE);
                        Logger::error_with_component(
                            P::COMPONENT,
                            &format!("Failed to create allocation: {}", e),
                        );
                    }
                }
                // Only a successful create yields an authoritative refresh.
                let fetch_generation = bump(&generation);
                if let Some(action) = action_after_create(&outcome, fetch_generation) {
                    board.dispatch(action);
                    load_allocations(provider, board, fetch_generation, teacher_id).await;
                }
            });
        })
    };

    let delete = {
        let provider = provider.clone();
        let board = board.clone();
        let generation = generation.clone();

        Callback::from(move |allocation_id: i64| {
            let teacher_id = board.selected_teacher();
            board.dispatch(BoardAction::RemoveLocal { allocation_id });

            let provider = provider.clone();
            let board = board.clone();
            let generation = generation.clone();
            spawn_local(async move {
                if let Err(e) = provider.delete(allocation_id).await {
                    Logger::error_with_component(
                        P::COMPONENT,
                        &format!("Failed to delete allocation {}: {}", allocation_id, e),
                    );
                }
                // Refetch regardless of the call outcome.
                if let Some(teacher_id) = teacher_id {
                    let fetch_generation = bump(&generation);
                    board.dispatch(BoardAction::BeginRefresh {
                        generation: fetch_generation,
                    });
                    load_allocations(provider, board, fetch_generation, teacher_id).await;
                }
            });
        })
    };

    let state = AllocationsState {
        teachers: (*teachers).clone(),
        targets: (*targets).clone(),
        allocations: board.allocations().to_vec(),
        teacher_choice: (*teacher_choice).clone(),
        target_choice: (*target_choice).clone(),
    };

    let actions = UseAllocationsActions {
        select_teacher,
        set_target,
        allocate,
        delete,
    };

    UseAllocationsResult { state, actions }
}
