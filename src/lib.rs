//! Persona Console - Profile-driven personalization for the control-plane console
//!
//! A short onboarding wizard records who the user is (role), what they do
//! (job areas), and what they are working on (tasks). The engines in
//! [`domain::personalization`] use that profile to filter and rank the
//! sidebar, choose module features, and pick welcome text and quick actions.
//! Without a profile, everything is shown.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
