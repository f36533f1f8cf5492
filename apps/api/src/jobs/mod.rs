// Job postings: listing/filtering, creation, and the startup seed catalogue.
// Each job's `skills` list is the required-skill input of the matcher.

pub mod handlers;
pub mod queries;
pub mod seed;
