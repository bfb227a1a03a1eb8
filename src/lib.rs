//! orgflow — organizational chart builder.
//!
//! Turns flat branch and agent records into a positioned node/edge diagram
//! with text search, per-branch expand/collapse, and paginated reveal of
//! large agent lists. The diagram is a pure function of the records and
//! the view state; clicks map back into state transitions and a rebuild.
//!
//! Pipeline: records → `filter` → `layout` (consulting `state`) →
//! `Diagram` → rendering surface → clicks → `interaction` → rebuild.

pub mod builder;
pub mod config;
pub mod filter;
pub mod interaction;
pub mod layout;
pub mod records;
pub mod render;
pub mod state;
