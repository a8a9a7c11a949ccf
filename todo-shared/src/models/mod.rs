pub mod errors;
pub mod timestamp;
pub mod todo;
pub mod user;

pub use errors::ErrorResponse;
pub use timestamp::Timestamp;
pub use todo::{CreateTodoRequest, MAX_PRIORITY, PRIORITY_LABELS, TodoRecord, priority_label};
pub use user::{
    ChangePasswordRequest, RegisterRequest, TokenRequest, TokenResponse, UserRecord,
};
