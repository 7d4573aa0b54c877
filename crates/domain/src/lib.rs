//! # haven-domain
//!
//! Pure domain model for the haven home security system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **alarm status** (quiet, pending, triggered) and the
//!   **arming status** (disarmed, armed-home, armed-away)
//! - Define **Sensors** (binary door/window/motion devices tracked by the hub)
//! - Define **camera images** as opaque payloads handed to a classifier
//! - Define **Events** (status-change records published on the event bus)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod alarm;
pub mod arming;
pub mod event;
pub mod image;
pub mod sensor;
