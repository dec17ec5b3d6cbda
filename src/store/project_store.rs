//! The project store.
//!
//! [`ProjectStore`] owns every project, the current-project pointer and the
//! workflow steps derived from the current project's phase. All changes go
//! through its operations, and each operation that changes something saves
//! the full state through the store's [`StateBackend`].

use tracing::{debug, info, warn};

use super::backend::StateBackend;
use super::state::{PersistedState, StoreState};
use crate::error::Result;
use crate::project::{Phase, PhasePatch, Project};
use crate::workflow::{derive_steps, initial_steps, WorkflowStep};

/// Authoritative holder of all projects.
#[derive(Debug)]
pub struct ProjectStore<B: StateBackend> {
    backend: B,
    projects: Vec<Project>,
    current_project_id: Option<String>,
    workflow_steps: Vec<WorkflowStep>,
}

impl<B: StateBackend> ProjectStore<B> {
    /// Load the store from `backend`.
    ///
    /// Persisted workflow steps are ignored and derived again from the
    /// current project.
    pub fn open(backend: B) -> Result<Self> {
        let persisted = backend.load()?;
        let StoreState {
            projects,
            current_project_id,
            ..
        } = persisted.state;

        let mut store = Self {
            backend,
            projects,
            current_project_id,
            workflow_steps: initial_steps(),
        };

        if let Some(phase) = store.current_project().map(|p| p.current_phase) {
            store.workflow_steps = derive_steps(phase);
        }

        debug!(
            "Opened store with {} project(s), current: {:?}",
            store.projects.len(),
            store.current_project_id
        );
        Ok(store)
    }

    /// All projects in creation order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Project with `id`.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Raw current-project pointer. May name a project that no longer exists.
    pub fn current_project_id(&self) -> Option<&str> {
        self.current_project_id.as_deref()
    }

    /// The selected project, if the pointer resolves.
    pub fn current_project(&self) -> Option<&Project> {
        self.current_project_id
            .as_deref()
            .and_then(|id| self.project(id))
    }

    /// Workflow step indicators for the last selected project.
    pub fn workflow_steps(&self) -> &[WorkflowStep] {
        &self.workflow_steps
    }

    /// The storage backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Full state as it is written to the backend.
    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            state: StoreState {
                projects: self.projects.clone(),
                current_project_id: self.current_project_id.clone(),
                workflow_steps: self.workflow_steps.clone(),
            },
            version: PersistedState::CURRENT_VERSION,
        }
    }

    /// Create a project, append it and make it current.
    pub fn create_project(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Project> {
        let project = Project::new(name, description);
        info!("Created project '{}' ({})", project.name, project.id);

        self.current_project_id = Some(project.id.clone());
        self.projects.push(project.clone());
        self.persist()?;

        Ok(project)
    }

    /// Remove the project with `id`, clearing the selection if it was
    /// current. Unknown ids are ignored.
    pub fn delete_project(&mut self, id: &str) -> Result<()> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);

        if self.projects.len() == before {
            debug!("delete_project: no project with id {}", id);
            return Ok(());
        }

        if self.current_project_id.as_deref() == Some(id) {
            self.current_project_id = None;
        }

        info!("Deleted project {}", id);
        self.persist()
    }

    /// Point the selection at `id`, or clear it with `None`.
    ///
    /// Steps are derived again only when `id` resolves. A cleared or
    /// unresolved selection leaves the previous steps in place.
    pub fn set_current_project(&mut self, id: Option<&str>) -> Result<()> {
        self.current_project_id = id.map(String::from);

        match self.current_project().map(|p| p.current_phase) {
            Some(phase) => {
                self.workflow_steps = derive_steps(phase);
            }
            None if id.is_some() => {
                warn!("Selected project {:?} does not exist", id);
            }
            None => {}
        }

        self.persist()
    }

    /// Move the current project to `phase`. Any phase may be chosen.
    /// No-op without a current project.
    pub fn update_project_phase(&mut self, phase: Phase) -> Result<()> {
        let Some(project) = self.current_project_mut() else {
            debug!("update_project_phase: no current project");
            return Ok(());
        };

        project.set_phase(phase);
        debug!("Project {} moved to phase {}", project.id, phase);

        self.workflow_steps = derive_steps(phase);
        self.persist()
    }

    /// Merge partial data into one of the current project's phase payloads.
    /// No-op without a current project.
    pub fn update_phase_data(&mut self, patch: impl Into<PhasePatch>) -> Result<()> {
        let patch = patch.into();
        let phase = patch.phase();

        let Some(project) = self.current_project_mut() else {
            debug!("update_phase_data({}): no current project", phase);
            return Ok(());
        };

        project.apply_patch(patch);
        debug!("Project {} updated {} data", project.id, phase);

        self.persist()
    }

    fn current_project_mut(&mut self) -> Option<&mut Project> {
        let id = self.current_project_id.as_deref()?;
        self.projects.iter_mut().find(|p| p.id == id)
    }

    fn persist(&mut self) -> Result<()> {
        let snapshot = self.snapshot();
        self.backend.save(&snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{PlanningPatch, StoryboardFrame, StoryboardPatch};
    use crate::store::MemoryBackend;
    use crate::storyboard::{add_frame, move_frame, MoveDirection};

    fn store() -> ProjectStore<MemoryBackend> {
        ProjectStore::open(MemoryBackend::new()).unwrap()
    }

    fn current_flags(store: &ProjectStore<MemoryBackend>) -> Vec<(bool, bool)> {
        store
            .workflow_steps()
            .iter()
            .map(|s| (s.completed, s.current))
            .collect()
    }

    #[test]
    fn empty_store_has_initial_steps() {
        let store = store();
        assert!(store.projects().is_empty());
        assert!(store.current_project().is_none());
        assert_eq!(store.workflow_steps(), initial_steps().as_slice());
    }

    #[test]
    fn create_project_selects_and_persists() {
        let mut store = store();
        let project = store.create_project("Demo", "desc").unwrap();

        assert_eq!(store.current_project_id(), Some(project.id.as_str()));
        assert_eq!(store.current_project().unwrap().current_phase, Phase::Planning);
        assert_eq!(store.backend().save_count(), 1);
        assert_eq!(
            store.backend().saved().unwrap().state.projects[0].id,
            project.id
        );
    }

    #[test]
    fn create_appends_in_order() {
        let mut store = store();
        store.create_project("first", "").unwrap();
        store.create_project("second", "").unwrap();

        let names: Vec<&str> = store.projects().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(store.current_project().unwrap().name, "second");
    }

    #[test]
    fn delete_current_clears_selection() {
        let mut store = store();
        let project = store.create_project("Demo", "").unwrap();

        store.delete_project(&project.id).unwrap();

        assert!(store.projects().is_empty());
        assert!(store.current_project_id().is_none());
        assert!(store.current_project().is_none());
    }

    #[test]
    fn delete_other_keeps_selection() {
        let mut store = store();
        let first = store.create_project("first", "").unwrap();
        let second = store.create_project("second", "").unwrap();

        store.delete_project(&first.id).unwrap();

        assert_eq!(store.current_project_id(), Some(second.id.as_str()));
    }

    #[test]
    fn delete_unknown_is_noop() {
        let mut store = store();
        store.create_project("Demo", "").unwrap();
        let saves = store.backend().save_count();

        store.delete_project("missing").unwrap();

        assert_eq!(store.projects().len(), 1);
        assert_eq!(store.backend().save_count(), saves);
    }

    #[test]
    fn select_derives_steps_from_project_phase() {
        let mut store = store();
        let first = store.create_project("first", "").unwrap();
        store.update_project_phase(Phase::Editing).unwrap();
        store.create_project("second", "").unwrap();

        store.set_current_project(Some(&first.id)).unwrap();

        let steps = store.workflow_steps();
        assert!(steps[4].current);
        assert!(steps[..4].iter().all(|s| s.completed));
    }

    #[test]
    fn reselecting_gives_same_steps() {
        let mut store = store();
        let project = store.create_project("Demo", "").unwrap();
        store.update_project_phase(Phase::Assets).unwrap();

        store.set_current_project(Some(&project.id)).unwrap();
        let once = store.workflow_steps().to_vec();
        store.set_current_project(Some(&project.id)).unwrap();

        assert_eq!(store.workflow_steps(), once.as_slice());
    }

    #[test]
    fn clearing_selection_keeps_previous_steps() {
        let mut store = store();
        store.create_project("Demo", "").unwrap();
        store.update_project_phase(Phase::Script).unwrap();
        let before = store.workflow_steps().to_vec();

        store.set_current_project(None).unwrap();
        assert!(store.current_project().is_none());
        assert_eq!(store.workflow_steps(), before.as_slice());

        store.set_current_project(Some("missing")).unwrap();
        assert!(store.current_project().is_none());
        assert_eq!(store.current_project_id(), Some("missing"));
        assert_eq!(store.workflow_steps(), before.as_slice());
    }

    #[test]
    fn phase_update_without_selection_is_noop() {
        let mut store = store();
        let project = store.create_project("Demo", "").unwrap();
        store.set_current_project(None).unwrap();
        let saves = store.backend().save_count();

        store.update_project_phase(Phase::Export).unwrap();
        store
            .update_phase_data(PlanningPatch {
                theme: Some("ignored".to_string()),
                ..Default::default()
            })
            .unwrap();

        let stored = store.project(&project.id).unwrap();
        assert_eq!(stored.current_phase, Phase::Planning);
        assert!(stored.phases.planning.theme.is_empty());
        assert_eq!(store.backend().save_count(), saves);
    }

    #[test]
    fn phase_update_allows_any_jump() {
        let mut store = store();
        store.create_project("Demo", "").unwrap();

        store.update_project_phase(Phase::Export).unwrap();
        assert_eq!(current_flags(&store)[5], (false, true));

        store.update_project_phase(Phase::Script).unwrap();
        assert_eq!(
            current_flags(&store),
            vec![
                (true, false),
                (false, true),
                (false, false),
                (false, false),
                (false, false),
                (false, false)
            ]
        );
    }

    #[test]
    fn phase_update_refreshes_updated_at() {
        let mut store = store();
        let project = store.create_project("Demo", "").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));

        store.update_project_phase(Phase::Script).unwrap();

        let stored = store.current_project().unwrap();
        assert!(stored.updated_at > project.updated_at);
        assert_eq!(stored.created_at, project.created_at);
    }

    #[test]
    fn phase_data_merges_fields() {
        let mut store = store();
        store.create_project("Demo", "").unwrap();

        store
            .update_phase_data(PlanningPatch {
                theme: Some("X".to_string()),
                ..Default::default()
            })
            .unwrap();
        store
            .update_phase_data(PlanningPatch {
                style: Some("Y".to_string()),
                ..Default::default()
            })
            .unwrap();

        let planning = &store.current_project().unwrap().phases.planning;
        assert_eq!(planning.theme, "X");
        assert_eq!(planning.style, "Y");
        assert!(planning.target_audience.is_empty());
        assert!(planning.duration.is_empty());
        assert!(planning.objectives.is_empty());
    }

    #[test]
    fn phase_data_does_not_change_phase() {
        let mut store = store();
        store.create_project("Demo", "").unwrap();
        store.update_project_phase(Phase::Storyboard).unwrap();
        let steps = store.workflow_steps().to_vec();

        store
            .update_phase_data(StoryboardPatch::frames(add_frame(&[], StoryboardFrame::new())))
            .unwrap();

        assert_eq!(store.current_project().unwrap().current_phase, Phase::Storyboard);
        assert_eq!(store.workflow_steps(), steps.as_slice());
    }

    #[test]
    fn storyboard_edits_round_trip_through_store() {
        let mut store = store();
        store.create_project("Demo", "").unwrap();

        let frames = ["a", "b", "c"].iter().fold(Vec::new(), |frames, title| {
            add_frame(
                &frames,
                StoryboardFrame {
                    title: title.to_string(),
                    ..StoryboardFrame::new()
                },
            )
        });
        store.update_phase_data(StoryboardPatch::frames(frames)).unwrap();

        let current = store.current_project().unwrap().phases.storyboard.frames.clone();
        store
            .update_phase_data(StoryboardPatch::frames(move_frame(
                &current,
                2,
                MoveDirection::Up,
            )))
            .unwrap();

        let frames = &store.current_project().unwrap().phases.storyboard.frames;
        let titles: Vec<&str> = frames.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c", "b"]);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.frame_number, (i + 1) as u32);
        }
    }

    #[test]
    fn open_recomputes_persisted_steps() {
        let mut store = store();
        store.create_project("Demo", "").unwrap();
        store.update_project_phase(Phase::Assets).unwrap();

        let mut snapshot = store.snapshot();
        snapshot.state.workflow_steps = derive_steps(Phase::Planning);

        let reopened = ProjectStore::open(MemoryBackend::with_state(snapshot)).unwrap();
        assert!(reopened.workflow_steps()[3].current);
    }

    #[test]
    fn open_with_stale_pointer_uses_initial_steps() {
        let mut snapshot = PersistedState::default();
        snapshot.state.current_project_id = Some("gone".to_string());
        snapshot.state.workflow_steps = derive_steps(Phase::Export);

        let reopened = ProjectStore::open(MemoryBackend::with_state(snapshot)).unwrap();
        assert!(reopened.current_project().is_none());
        assert_eq!(reopened.workflow_steps(), initial_steps().as_slice());
    }

    #[test]
    fn failed_save_keeps_in_memory_change() {
        let mut backend = MemoryBackend::new();
        backend.fail_saves(true);
        let mut store = ProjectStore::open(backend).unwrap();

        let result = store.create_project("Demo", "");

        assert!(result.is_err());
        assert_eq!(store.projects().len(), 1);
        assert_eq!(store.current_project().unwrap().name, "Demo");
    }
}
