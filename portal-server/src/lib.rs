//! portal-server — content-management backend for an exam/job portal
//!
//! Admins manage employees, categories, FAQs, highlight cards, home-page
//! content, job postings and image thumbnails; employees edit a subset;
//! a public API serves active content. Authorization is JWT-based with
//! the principal re-resolved against the store on every admin request.

pub mod api;
pub mod auth;
pub mod common;
pub mod config;
pub mod db;
pub mod state;
