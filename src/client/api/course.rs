use std::fmt;

use dioxus_logger::tracing;
use reqwest::multipart::{Form, Part};

use crate::{
    client::{
        api::{decode, ApiClient},
        error::Error,
    },
    model::{
        api::{ImageUploadDto, MessageDto},
        course::{Course, CourseDraft, Module},
    },
};

/// Multipart field the backend reads the uploaded image from
pub const IMAGE_FIELD: &str = "image";

/// Course an uploaded image belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadTarget {
    /// Course that already exists on the backend
    Existing(i64),
    /// Course still being drafted, uploaded under the `new` sentinel
    New,
}

impl fmt::Display for UploadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Existing(id) => write!(f, "{}", id),
            Self::New => f.write_str("new"),
        }
    }
}

impl ApiClient {
    /// Retrieve every course with its modules
    ///
    /// `GET /courses`, authenticated when the client carries a token.
    pub async fn list_courses(&self) -> Result<Vec<Course>, Error> {
        let response = self
            .maybe_authorized(self.http.get(self.url("/courses")))
            .send()
            .await?;

        decode::<Vec<Course>>(response).await
    }

    /// Retrieve a single course with its modules
    ///
    /// `GET /courses/{id}`
    ///
    /// # Returns
    /// - `Ok(Course)`: course found
    /// - `Err(Error::Rejected)`: status 404 with the backend's "not found" message
    pub async fn get_course(&self, id: i64) -> Result<Course, Error> {
        let response = self
            .maybe_authorized(self.http.get(self.url(&format!("/courses/{}", id))))
            .send()
            .await?;

        decode::<Course>(response).await
    }

    /// `POST /add_course`
    ///
    /// The backend only answers with a status message, callers re-fetch the list to see the
    /// assigned id.
    pub async fn create_course(&self, draft: &CourseDraft) -> Result<MessageDto, Error> {
        let response = self
            .authorized(self.http.post(self.url("/add_course")))?
            .json(draft)
            .send()
            .await?;

        let message = decode::<MessageDto>(response).await?;

        tracing::info!(title = %draft.title, "{}", message.message);

        Ok(message)
    }

    /// Replace a course and all of its modules
    ///
    /// `POST /update_course/{id}` with the full course as body.
    pub async fn update_course(&self, id: i64, course: &Course) -> Result<MessageDto, Error> {
        let response = self
            .authorized(self.http.post(self.url(&format!("/update_course/{}", id))))?
            .json(course)
            .send()
            .await?;

        let message = decode::<MessageDto>(response).await?;

        tracing::info!(course_id = %id, "{}", message.message);

        Ok(message)
    }

    /// `DELETE /delete_course/{id}`
    pub async fn delete_course(&self, id: i64) -> Result<MessageDto, Error> {
        let response = self
            .authorized(self.http.delete(self.url(&format!("/delete_course/{}", id))))?
            .send()
            .await?;

        let message = decode::<MessageDto>(response).await?;

        tracing::info!(course_id = %id, "{}", message.message);

        Ok(message)
    }

    /// Append a module to an existing course
    ///
    /// `POST /add_module/{course_id}`
    pub async fn add_module(&self, course_id: i64, module: &Module) -> Result<MessageDto, Error> {
        let response = self
            .authorized(self.http.post(self.url(&format!("/add_module/{}", course_id))))?
            .json(module)
            .send()
            .await?;

        let message = decode::<MessageDto>(response).await?;

        tracing::debug!(course_id = %course_id, "{}", message.message);

        Ok(message)
    }

    /// Upload a course image
    ///
    /// `POST /upload_image/{id|new}` as multipart with the file in the `image` field.
    ///
    /// # Returns
    /// - `Ok(String)`: URL the backend serves the image under
    pub async fn upload_image(
        &self,
        target: UploadTarget,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, Error> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .authorized(self.http.post(self.url(&format!("/upload_image/{}", target))))?
            .multipart(form)
            .send()
            .await?;

        let upload = decode::<ImageUploadDto>(response).await?;

        tracing::debug!(upload_target = %target, image_url = %upload.image_url, "Uploaded course image");

        Ok(upload.image_url)
    }
}
