//! Grades short programming exercises by running learner code against
//! per-task validator snippets in a throwaway workspace, under a fixed
//! wall-clock deadline.
//!
//! The serving layer (HTTP, static pages) lives outside this crate; it
//! consumes [`Grader::execute`] and the read-only [`TaskCatalog`].

pub mod adapter;
pub mod catalog;
pub mod classify;
pub mod constants;
pub mod domain;
pub mod engine;
pub mod grader;
pub mod registry;
pub mod workspace;

#[cfg(test)]
mod integration_test;

pub use catalog::TaskCatalog;
pub use domain::{ExecutionResult, Language, Outcome, Submission, TaskDescriptor};
pub use grader::Grader;
