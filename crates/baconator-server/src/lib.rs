//! Baconator Server - HTTP interface to the actor/movie graph

pub mod handlers;
pub mod server;

pub use handlers::{HandlerResponse, Operation, RequestHandler, ResponseBody};
pub use server::{create_router, run_server, ServerConfig, API_PREFIX};
