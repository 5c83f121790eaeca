//! Domain model (IDs, statuses, session identity, entity handles, errors).

pub mod entity;
pub mod errors;
pub mod ids;
pub mod session;
pub mod status;

pub use self::entity::EntityHandle;
pub use self::errors::ApiError;
pub use self::ids::{MediaId, ViewerId};
pub use self::session::{AUTH_KEY, SessionIdentity};
pub use self::status::ListStatus;
