pub mod course_record;
pub mod facet;
pub mod field_value;
pub mod semester;
