// Library root
// -----------
// This crate exposes a small library surface for the CRM CLI. The binary
// (`main.rs`) uses these modules to implement the interactive menu.
//
// Module responsibilities:
// - `store`: The customer document model and the MongoDB-backed client
//   behind the `CustomerStore` trait.
// - `ui`: Implements the terminal menu loop and the four customer
//   actions, delegating persistence to `store`.
//
// Keeping this separation makes it easier to test the action flows
// against an in-memory store, or to replace the UI in the future.
pub mod store;
pub mod ui;
