pub mod co_scholastic;
pub mod exam_config;
pub mod marks;
