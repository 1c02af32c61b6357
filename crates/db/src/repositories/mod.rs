//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod model_repo;
pub mod platform_repo;
pub mod prompt_repo;
pub mod role_repo;
pub mod session_repo;
pub mod submission_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use model_repo::ModelRepo;
pub use platform_repo::PlatformRepo;
pub use prompt_repo::PromptRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use submission_repo::SubmissionRepo;
pub use user_repo::UserRepo;
