//! Entity structs for all apis domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `apis-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema`; JSON field names are `camelCase`.

mod alert;
mod apiary;
mod hive;
mod inspection;
mod recommendation;
mod task;
mod user;

pub use alert::Alert;
pub use apiary::Apiary;
pub use hive::Hive;
pub use inspection::Inspection;
pub use recommendation::Recommendation;
pub use task::Task;
pub use user::User;
