pub mod audience;
pub mod db;
pub mod error;
pub mod middleware;
pub mod notification;
pub mod push;
pub mod routes;
pub mod state;
pub mod user;
