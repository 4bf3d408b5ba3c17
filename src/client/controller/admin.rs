//! Admin panel state and the writes behind it.
//!
//! [`AdminState`] holds everything the panel shows: the managed course list, the search
//! box, the create form, the module form and at most one course being edited in place.
//! Editing is a two-state machine: `Idle` when `editing` is `None` and `Editing(course)`
//! when it holds a snapshot of one course. Cancelling drops the snapshot without touching
//! the backend, saving goes through [`AdminService::save`].
//!
//! [`AdminService`] performs the writes. Every write is followed by exactly one re-fetch
//! of the course list so the panel shows what the backend stored.

use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ApiClient, UploadTarget},
        error::Error,
        util::filter_courses,
    },
    model::course::{Course, CourseDraft, Difficulty, Module, ModuleDraft},
};

/// Editable field of a module in the edit-in-place form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleField {
    Title,
    Content,
    Video,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminState {
    pub courses: Vec<Course>,
    pub search: String,
    pub new_course: CourseDraft,
    pub new_module: ModuleDraft,
    pub editing: Option<Course>,
    pub error: Option<String>,
}

impl AdminState {
    /// Managed courses matching the search box
    pub fn visible_courses(&self) -> Vec<&Course> {
        filter_courses(&self.courses, &self.search, None)
    }

    /// Applies the result of a list fetch
    ///
    /// A failed fetch keeps the previous list and shows the backend's message.
    pub fn apply_fetch(&mut self, result: Result<Vec<Course>, Error>) {
        match result {
            Ok(courses) => {
                self.courses = courses;
                self.error = None;
            }
            Err(err) => {
                tracing::error!("Failed to fetch courses: {}", err);

                self.error = Some(err.user_message());
            }
        }
    }

    pub fn is_editing(&self, id: i64) -> bool {
        self.editing.as_ref().is_some_and(|course| course.id == id)
    }

    /// Enters `Editing` with a snapshot of course `id`
    ///
    /// Replaces any edit already in progress. Returns `false` when the course is unknown.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        match self.courses.iter().find(|course| course.id == id) {
            Some(course) => {
                self.editing = Some(course.clone());
                true
            }
            None => false,
        }
    }

    /// Returns to `Idle`, discarding the draft
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn edit_title(&mut self, title: String) {
        if let Some(course) = self.editing.as_mut() {
            course.title = title;
        }
    }

    pub fn edit_description(&mut self, description: String) {
        if let Some(course) = self.editing.as_mut() {
            course.description = description;
        }
    }

    pub fn edit_difficulty(&mut self, difficulty: Difficulty) {
        if let Some(course) = self.editing.as_mut() {
            course.difficulty = difficulty;
        }
    }

    pub fn edit_module(&mut self, index: usize, field: ModuleField, value: String) {
        let Some(module) = self
            .editing
            .as_mut()
            .and_then(|course| course.modules.get_mut(index))
        else {
            return;
        };

        match field {
            ModuleField::Title => module.title = value,
            ModuleField::Content => module.content = value,
            ModuleField::Video => module.video = Some(value).filter(|url| !url.is_empty()),
        }
    }

    pub fn remove_module(&mut self, index: usize) {
        if let Some(course) = self.editing.as_mut() {
            if index < course.modules.len() {
                course.modules.remove(index);
            }
        }
    }

    /// Where an image picked in the form should be uploaded
    pub fn upload_target(&self) -> UploadTarget {
        match self.editing {
            Some(ref course) => UploadTarget::Existing(course.id),
            None => UploadTarget::New,
        }
    }

    /// Stores an uploaded image URL on the draft it was uploaded for
    pub fn apply_image(&mut self, target: UploadTarget, image_url: String) {
        match target {
            UploadTarget::Existing(id) => {
                if let Some(course) = self.editing.as_mut().filter(|course| course.id == id) {
                    course.image = Some(image_url);
                }
            }
            UploadTarget::New => self.new_course.image = Some(image_url),
        }
    }

    /// Takes the module form contents, clearing the form
    pub fn take_new_module(&mut self) -> Module {
        Module::from(std::mem::take(&mut self.new_module))
    }

    /// Appends a module to the create form draft, it is sent with the new course
    pub fn stage_module(&mut self) {
        let module = self.take_new_module();
        self.new_course.modules.push(module);
    }

    /// Appends a module the backend accepted to the course being edited
    ///
    /// This is the only optimistic update, the next list fetch replaces it with the
    /// backend's module list.
    pub fn apply_added_module(&mut self, course_id: i64, module: Module) {
        if let Some(course) = self
            .editing
            .as_mut()
            .filter(|course| course.id == course_id)
        {
            course.modules.push(module);
        }
    }

    /// Shows a failed request in the panel's error slot
    pub fn fail(&mut self, err: &Error) {
        tracing::error!(status = ?err.status(), "Admin request failed: {}", err);

        self.error = Some(err.user_message());
    }

    /// Applies the outcome of [`AdminService::save`]
    ///
    /// `Editing` is left as soon as the backend accepted the update, even when the
    /// re-fetch then fails, so the same update is never sent twice. A rejected update
    /// keeps the draft open.
    pub fn apply_save(&mut self, outcome: WriteOutcome) {
        match outcome {
            Ok(fetched) => {
                self.editing = None;
                self.apply_fetch(fetched);
            }
            Err(err) => self.fail(&err),
        }
    }

    /// Applies the outcome of [`AdminService::create`], resetting the create form once stored
    pub fn apply_create(&mut self, outcome: WriteOutcome) {
        match outcome {
            Ok(fetched) => {
                self.new_course = CourseDraft::default();
                self.apply_fetch(fetched);
            }
            Err(err) => self.fail(&err),
        }
    }

    /// Applies the outcome of [`AdminService::delete`], dropping the draft of a deleted course
    pub fn apply_delete(&mut self, id: i64, outcome: WriteOutcome) {
        match outcome {
            Ok(fetched) => {
                if self.is_editing(id) {
                    self.editing = None;
                }
                self.apply_fetch(fetched);
            }
            Err(err) => self.fail(&err),
        }
    }
}

/// Outcome of a write followed by a list re-fetch
///
/// The outer result is the write. The inner result is the re-fetch, which can still fail
/// after the backend stored the write.
pub type WriteOutcome = Result<Result<Vec<Course>, Error>, Error>;

pub struct AdminService<'a> {
    api: &'a ApiClient,
}

impl<'a> AdminService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn fetch(&self) -> Result<Vec<Course>, Error> {
        self.api.list_courses().await
    }

    /// Sends the full edit draft then re-fetches the list
    ///
    /// # Returns
    /// - `Ok(Ok(Vec<Course>))`: the list as stored after the update
    /// - `Ok(Err(Error))`: update stored, re-fetch failed
    /// - `Err(Error)`: update failed, the draft is kept by the caller
    pub async fn save(&self, draft: &Course) -> WriteOutcome {
        self.api.update_course(draft.id, draft).await?;

        Ok(self.fetch().await)
    }

    /// Creates a course from the create form then re-fetches the list
    pub async fn create(&self, draft: &CourseDraft) -> WriteOutcome {
        self.api.create_course(draft).await?;

        Ok(self.fetch().await)
    }

    /// Deletes a course then re-fetches the list
    pub async fn delete(&self, id: i64) -> WriteOutcome {
        self.api.delete_course(id).await?;

        Ok(self.fetch().await)
    }

    /// Adds a module to an existing course, no re-fetch
    pub async fn add_module(&self, course_id: i64, module: &Module) -> Result<(), Error> {
        self.api.add_module(course_id, module).await?;

        Ok(())
    }

    pub async fn upload_image(
        &self,
        target: UploadTarget,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, Error> {
        self.api.upload_image(target, file_name, bytes).await
    }
}
