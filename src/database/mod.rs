pub mod connection;
pub mod matches;
pub mod models;
pub mod players;
pub mod setup;
pub mod store;

pub use connection::{create_pool, get_connection, DbConn, DbPool, OpenMode};
pub use models::*;
pub use store::{SqliteStore, TournamentStore};
