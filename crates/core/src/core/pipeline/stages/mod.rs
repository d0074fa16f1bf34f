//! Pipeline stage functions.
//!
//! One file per stage. Each stage is a free function over the pipeline
//! state; the engine invokes them in reverse pipeline order every cycle
//! (see `crate::core::pipeline::Pipeline::cycle`).

pub mod commit;
pub mod decode;
pub mod execute;
pub mod fetch;
pub mod issue;
pub mod schedule;
pub mod writeback;
