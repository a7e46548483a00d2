pub mod a001_lead;
pub mod common;
