pub mod organizations;
pub mod projects;
pub mod task_comments;
pub mod tasks;
