//! Tests for token issuance
