//! Integration tests for the Gemini relay
//!
//! These tests drive the real router through `axum-test` while the upstream
//! Gemini API is replaced by a wiremock server.

mod relay;
