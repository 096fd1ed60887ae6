pub mod stage0_normalize;
pub mod stage1_mark;
pub mod stage2_syllabify;
pub mod stage3_nasalize;
pub mod stage4_stress;
pub mod stage5_render;
pub mod stage6_final_rules;

pub use stage0_normalize::*;
pub use stage1_mark::*;
pub use stage2_syllabify::*;
pub use stage3_nasalize::*;
pub use stage4_stress::*;
pub use stage5_render::*;
pub use stage6_final_rules::*;
