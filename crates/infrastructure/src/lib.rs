//! Ferrous RevIP Infrastructure Layer
pub mod http;
pub mod providers;
pub mod storage;
