pub mod mask_builder;
pub mod mask_region;
