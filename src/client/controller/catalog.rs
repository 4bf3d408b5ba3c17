//! Read-only pages: landing page, course list and course detail.

use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        error::Error,
        util::{featured_courses, filter_courses},
    },
    model::course::{Course, Difficulty, Module},
};

pub struct CatalogService<'a> {
    api: &'a ApiClient,
}

impl<'a> CatalogService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Featured courses for the landing page, fetched without a session
    pub async fn featured(&self) -> Result<Vec<Course>, Error> {
        let courses = self.api.with_token(None).list_courses().await?;

        Ok(featured_courses(&courses).into_iter().cloned().collect())
    }

    /// Every course, fetched with the session token
    pub async fn courses(&self) -> Result<Vec<Course>, Error> {
        self.api.list_courses().await
    }

    pub async fn course(&self, id: i64) -> Result<Course, Error> {
        self.api.get_course(id).await
    }
}

/// Landing page state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeState {
    pub featured: Vec<Course>,
    pub error: Option<String>,
}

impl HomeState {
    pub fn apply_fetch(&mut self, result: Result<Vec<Course>, Error>) {
        match result {
            Ok(featured) => {
                self.featured = featured;
                self.error = None;
            }
            Err(err) => {
                tracing::error!("Failed to fetch featured courses: {}", err);

                self.error = Some(err.user_message());
            }
        }
    }
}

/// Course list page state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoursesState {
    pub courses: Vec<Course>,
    pub query: String,
    pub difficulty: Option<Difficulty>,
    pub error: Option<String>,
}

impl CoursesState {
    /// Applies a list fetch, keeping the search box and selector as they are
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

    /// Courses matching the current search box and difficulty selector
    pub fn visible(&self) -> Vec<&Course> {
        filter_courses(&self.courses, &self.query, self.difficulty)
    }
}

/// Course detail page state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CourseDetailState {
    pub course: Option<Course>,
    pub active_module: Option<usize>,
    pub error: Option<String>,
}

impl CourseDetailState {
    pub fn apply_fetch(&mut self, result: Result<Course, Error>) {
        self.active_module = None;

        match result {
            Ok(course) => {
                self.course = Some(course);
                self.error = None;
            }
            Err(err) => {
                tracing::error!("Failed to fetch course data: {}", err);

                self.error = Some(err.user_message());
            }
        }
    }

    /// Opens the module overlay, ignoring indexes outside the module list
    pub fn open_module(&mut self, index: usize) {
        let exists = self
            .course
            .as_ref()
            .is_some_and(|course| index < course.modules.len());

        if exists {
            self.active_module = Some(index);
        }
    }

    pub fn close_module(&mut self) {
        self.active_module = None;
    }

    /// Module shown in the overlay, if it is open
    pub fn active_module(&self) -> Option<&Module> {
        let course = self.course.as_ref()?;
        course.modules.get(self.active_module?)
    }
}
