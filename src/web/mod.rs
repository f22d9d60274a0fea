// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Thin HTTP layer mapping URLs onto the dispatcher.

pub mod handlers;
pub mod routes;
pub mod server;

pub use routes::create_router;
pub use server::serve;
