//! Seams between the pipeline and its collaborators.

pub mod job_store;
pub mod text_generator;

pub use job_store::IJobStore;
pub use text_generator::ITextGenerator;
