//! Shared test utilities for lf-store unit tests.
