//! Data models for `FindMyCgpa`

pub mod course;
pub mod scale;

pub use course::{CourseEntry, CourseList};
pub use scale::Scale;
