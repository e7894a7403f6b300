//! Authorization code flow: ports and orchestration

pub mod ports;
pub mod service;
