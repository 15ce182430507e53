//! This crate contains all shared UI for the workspace: the session
//! provider, the navbar, form primitives, and the dialogs the project pages
//! open. Views that belong to a single frontend live with that frontend;
//! everything here is used from more than one page.

mod session;
pub use session::{use_session, LogoutButton, SessionProvider, SessionState};

mod navbar;
pub use navbar::Navbar;

pub mod components;
pub use components::{Button, ButtonVariant, ErrorAlert, Input, Label};

mod modal;
pub use modal::ModalOverlay;

mod project_form;
pub use project_form::ProjectDialog;

mod user_management;
pub use user_management::UserManagementDialog;

mod comments;
pub use comments::{CommentForm, CommentList};

pub mod dialog;

pub mod format;
pub use format::{format_timestamp, truncate};
