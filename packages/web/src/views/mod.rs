mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod projects;
pub use projects::Projects;

mod project_detail;
pub use project_detail::ProjectDetail;
