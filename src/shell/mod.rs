// Composition root for the bookings bounded context.
//
// Responsibilities
// - Read config from the environment.
// - Pick the booking store backend and wire it into the use case handlers.
// - Expose the HTTP routes and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
