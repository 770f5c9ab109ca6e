pub mod doctor;
pub mod output;
pub mod render;
pub mod table;
