//! # API crate — typed client for the ProjectHub REST backend
//!
//! Everything the frontends need to talk to the backend lives here: the JSON
//! models, the endpoint catalogue, the request plumbing (session cookie +
//! CSRF header), and the pure access-control rules the views render from.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Session check, login, registration, logout |
//! | [`projects`] | Project CRUD, collaborators, roles, comments |
//! | [`models`] | JSON payloads exchanged with the backend |
//! | [`access`] | Role lookup and per-role action visibility |
//! | [`error`] | [`ApiError`] and the backend's rejection body shapes |
//! | [`csrf`] | `csrftoken` cookie lookup for state-changing requests |
//! | [`endpoints`] | URL builders for every backend route |
//!
//! All calls are same-origin and rely on the browser to attach the session
//! cookie. Off-browser (native builds, unit tests) the HTTP layer returns
//! [`ApiError::Unsupported`] so the crate still compiles and tests run.

pub mod access;
pub mod auth;
pub mod csrf;
pub mod endpoints;
pub mod error;
mod http;
pub mod models;
pub mod projects;

pub use access::{role_of, ActionVisibility};
pub use error::{ApiError, ErrorBody, Field};
pub use models::{
    Collaborator, Comment, Credentials, Project, ProjectDetail, ProjectFields, Registration,
    Role, User,
};
