use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Admin, CourseDetail, Courses, Home, Login, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/courses")]
    Courses {},

    #[route("/courses/:id")]
    CourseDetail { id: i64 },

    #[route("/login")]
    Login {},

    #[route("/admin")]
    Admin {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
