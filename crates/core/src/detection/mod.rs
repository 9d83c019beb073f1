pub mod detection_adapter;
pub mod domain;
