//! Mock authentication: user store, validation, pseudo-token and the session store

pub mod clock;
mod error;
pub mod repository;
pub mod storage;
mod token;
mod user;
mod validation;
mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AuthError, AuthOutcome, INTERNAL_ERROR_MESSAGE};
pub use repository::{demo_admin, InMemoryUserRepository, UserRepository};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, TOKEN_KEY, USER_KEY};
pub use token::SessionToken;
pub use user::{RegisterRequest, Role, User, UserRecord};
pub use validation::{
    is_valid_email, is_valid_password, is_valid_tax_id, validate_login, validate_registration,
    MIN_PASSWORD_LEN, TAX_ID_PATTERN,
};
pub use session::{
    Registration, RestoreOutcome, SessionState, SessionStore, LOGIN_SUCCESS_MESSAGE,
    REGISTER_LOGIN_FAILED_MESSAGE, REGISTER_SUCCESS_MESSAGE, RESET_REQUESTED_MESSAGE,
};
