//! Labour and purchasing default margin calculator.
//!
//! [`domain::derive`] fills in a pricing record (cost, markup, profit, charge,
//! margin) from its cost and one other field. The rest of the crate is the
//! session state, formatting and preferences the desktop app wraps around it.

pub mod domain;
pub mod util;
