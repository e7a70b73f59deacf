//! Business logic for the review workflow.
//!
//! The `review` service orchestrates channel configuration, prompt issuance, prompt
//! activation, and review submission on top of the repositories in `data`. All Discord
//! side effects go through the `ReviewDelivery` trait so the workflow can run against a
//! recording implementation in tests.

pub mod review;

#[cfg(test)]
mod test;
