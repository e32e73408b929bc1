//! Utility functions for controller request handling.
//!
//! This module provides reusable helpers for checking the active authentication strategy and
//! the visitor's authentication state before a controller does its work.

pub mod auth;
