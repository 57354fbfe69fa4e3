pub mod attendance_repo;
pub mod meeting_repo;
pub mod member_repo;
pub mod models;
