// Resume ↔ job skill matching.
// `matcher` is the pure scoring core; `recommendation` shapes its output for the API.

pub mod matcher;
pub mod recommendation;
