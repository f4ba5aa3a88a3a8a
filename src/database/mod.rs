pub mod connection;
pub mod rounds;
pub mod setup;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
