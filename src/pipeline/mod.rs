//! Pipeline orchestration and boundary contracts
//!
//! Entry points wiring the pure components together, plus the serde
//! request/response shapes that mirror the external service contract.

pub mod response;
pub mod runner;

pub use response::{AnchorRequest, AnchorResponse};
pub use runner::{
    breakdown, breakdown_batch, breakdown_default, generate_anchors, generate_anchors_batch,
    BreakdownConfig, PipelineError,
};
