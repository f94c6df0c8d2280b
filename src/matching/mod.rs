//! Skill normalization and comparison

pub mod comparator;
pub mod normalizer;

pub use comparator::{compare, SkillComparison};
pub use normalizer::{normalize_skill, normalize_skills};
