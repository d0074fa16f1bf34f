/// End-to-end timing scenarios for the scalar and superscalar pipeline.
pub mod scenarios;

/// In-order vs. out-of-order scheduling policy behavior.
pub mod policies;



/// Trace fault handling: truncation, bad records, and draining.
pub mod trace_faults;
