//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every method is one statement
//! against one row or one filtered read.

pub mod co_scholastic_repo;
pub mod exam_config_repo;
pub mod marks_repo;

pub use co_scholastic_repo::CoScholasticAreaRepo;
pub use exam_config_repo::ExamConfigRepo;
pub use marks_repo::MarksRepo;
