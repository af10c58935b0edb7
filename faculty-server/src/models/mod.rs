//! Domain models with validation at construction
//!
//! Request input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod course;
pub mod teacher;
pub mod validation;

pub use course::{Course, CourseName, NewCourse, StudentCount};
pub use teacher::{NewTeacher, Teacher, TeacherName};
pub use validation::ValidationError;
