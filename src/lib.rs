//! bistro-ops — staff operations backend for a restaurant.
//!
//! Tracks shifts, reservations, shift-end reports, worked hours, clothing
//! deposits, and user accounts behind a role-gated JSON API. Three role
//! tiers (waiter, shift lead, manager) determine what each user may see or
//! change; the full policy lives in [`policy`].

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod policy;
pub mod state;
pub mod util;
