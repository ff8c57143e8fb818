pub mod indexed_min_heap;
pub mod search_data;
