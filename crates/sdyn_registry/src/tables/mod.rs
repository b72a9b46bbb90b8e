//! The function tables.
//!
//! Each table lists its functions in the order of the C headers they come
//! from, which is also the order slots are bound and listed in.

mod app;
mod gfx;
mod glue;
