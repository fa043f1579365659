pub mod hashmap_session_store;
pub mod hashmap_user_directory;
pub mod postgres_user_directory;
pub mod redis_session_store;

pub use hashmap_session_store::HashMapSessionStore;
pub use hashmap_user_directory::HashMapUserDirectory;
pub use postgres_user_directory::PostgresUserDirectory;
pub use redis_session_store::RedisSessionStore;
