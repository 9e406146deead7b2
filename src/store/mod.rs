//! Document Store Module
//!
//! Holds the fixed set of text documents the retriever searches over.
//!
//! ## Core Concepts
//! - **Seeding**: The store is populated once at startup and never mutated afterwards.
//! - **Ordering**: Documents keep their insertion order, which doubles as the
//!   tie-break order when two documents score the same.
//! - **Sharing**: Being read-only, a single store can be shared across any number of
//!   concurrent requests without locking.

pub mod memory;

#[cfg(test)]
mod tests;
