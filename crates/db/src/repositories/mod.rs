//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod badge_repo;
pub mod challenge_repo;
pub mod goal_repo;
pub mod membership_repo;
pub mod tag_repo;
pub mod user_repo;

pub use badge_repo::BadgeRepo;
pub use challenge_repo::ChallengeRepo;
pub use goal_repo::GoalRepo;
pub use membership_repo::MembershipRepo;
pub use tag_repo::TagRepo;
pub use user_repo::UserRepo;
