pub mod coding;
pub mod graphs;
pub mod search;
pub mod sorting;
pub mod utility;
