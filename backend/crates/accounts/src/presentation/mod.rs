//! Presentation Module

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use router::{session_router, session_router_generic};
