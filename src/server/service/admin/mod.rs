//! Superuser bootstrap through temporary verification codes.

pub mod code;
