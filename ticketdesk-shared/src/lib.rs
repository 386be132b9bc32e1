#![cfg_attr(not(test), forbid(unsafe_code))]
//! Wire models shared by the TicketDesk clients.
//!
//! Everything in here mirrors the JSON shapes served by the ticketing REST
//! API, plus the identity claims the web client reads out of a login token.

pub mod models;
