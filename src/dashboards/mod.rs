//! Dashboards module
//!
//! One view per page of the hostel front-end. Each view pairs the typed
//! API client with a [`Dashboard`](crate::state::Dashboard) holding its
//! local state.

pub mod admin;
pub mod student;
