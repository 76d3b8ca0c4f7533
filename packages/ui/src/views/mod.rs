mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod overview;
pub use overview::OverviewView;

mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod projects;
pub use projects::ProjectsView;

mod projects_manager;
pub use projects_manager::ProjectsManager;

mod project_browser;
pub use project_browser::ProjectBrowser;

mod tasks;
pub use tasks::TasksView;

mod users;
pub use users::UsersView;

mod api_status;
pub use api_status::ApiStatusView;
