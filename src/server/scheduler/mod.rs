//! Cron jobs started alongside the HTTP server.

pub mod hackathon_status;
