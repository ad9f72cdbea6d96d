//! Application Module

pub mod check_session;
pub mod close_session;
pub mod config;
pub mod moderate_user;
pub mod open_session;

pub use check_session::{CheckSessionUseCase, CurrentUser};
pub use close_session::CloseSessionUseCase;
pub use config::AccountsConfig;
pub use moderate_user::ModerateUserUseCase;
pub use open_session::{OpenSessionInput, OpenSessionOutput, OpenSessionUseCase};
