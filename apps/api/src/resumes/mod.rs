// Resume intake and analysis: multipart upload, text extraction, matching against a job
// (or every job), persistence, and the improved-resume download.

pub mod handlers;
pub mod queries;
pub mod rewrite;
pub mod upload;
