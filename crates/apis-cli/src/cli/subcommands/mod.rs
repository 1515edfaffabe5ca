mod alert;
mod apiary;
mod hive;
mod inspection;
mod recommendation;
mod task;

pub use alert::AlertCommands;
pub use apiary::ApiaryCommands;
pub use hive::HiveCommands;
pub use inspection::{InspectionCommands, InspectionCreateArgs, InspectionUpdateArgs};
pub use recommendation::RecommendationCommands;
pub use task::TaskCommands;
