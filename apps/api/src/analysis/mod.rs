// Layout and composite scoring endpoints.
// All scoring logic lives in the layout-score crate; this module only adapts it to HTTP.

pub mod handlers;
