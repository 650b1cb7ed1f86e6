pub mod stage1_load;
pub mod stage2_normalize;
