//! NGC 5139 photometric catalog → interactive 3D colour–colour–magnitude plot.
//!
//! Data flows strictly forward:
//! [`data::loader`] → [`data::filter`] → [`data::derive`] → [`plot`],
//! wired together by [`pipeline::run`].

pub mod data;
pub mod pipeline;
pub mod plot;
