pub mod resume;
pub mod seed;

pub use resume::ResumeProfile;
