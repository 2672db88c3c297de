/*
 * Lifecycle Infrastructure
 *
 * Built-in resource API definitions and the issue registry.
 */

pub mod built_in;
mod registry;

pub use built_in::{resource_api, BROADCAST_RECEIVER, GOOGLE_API_CLIENT};
pub use registry::{IssueRegistry, BROADCAST_RECEIVER_ISSUE, GOOGLE_API_CLIENT_ISSUE};
