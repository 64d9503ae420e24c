//! End-to-end scenarios for the world step
