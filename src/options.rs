use std::{net::SocketAddr, str::FromStr};

use lazy_static::lazy_static;
use log::{error, info, warn};

// get and parse an environment variable
// use default value if not set
fn var<T>(name: &str, default: &str) -> T
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Debug,
{
    let given = std::env::var(name).unwrap_or(default.to_owned());
    match given.parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            error!(
                "Invalid config option `{}={}`: {:?} ({}'s default is usually {})",
                name, given, e, name, default
            );
            std::process::exit(1);
        }
    }
}

lazy_static! {
    pub static ref NUM_WEB_WORKERS: usize = var("NUM_WEB_WORKERS", "4");

    pub static ref BIND_ADDR: SocketAddr = var("BIND_ADDR", "127.0.0.1:8080");

    static ref DB_HOST: String = var("DB_HOST", "127.0.0.1");
    static ref DB_PORT: u16 = var("DB_PORT", "5432");
    static ref DB_USER: String = var("DB_USER", "gym-backend");
    static ref DB_PASSWORD: String = var("DB_PASSWORD", "dev");
    static ref DB_NAME: String = var("DB_NAME", "gym-backend");
    pub static ref DB_POOL_MAX_CONNS: u32 = var("DB_POOL_MAX_CONNS", "5");
    pub static ref DB_RUN_MIGRATIONS: bool = var("DB_RUN_MIGRATIONS", "true");

    // marks session cookies `secure` when running behind https
    pub static ref PRODUCTION: bool = var("PRODUCTION", "false");

    pub static ref HANDLE_CORS: bool = var("HANDLE_CORS", "true");

    // directory the frontend bundle is served from
    pub static ref STATIC_PATH: String = var("STATIC_PATH", "./static");
}

pub fn db_conn_string() -> String {
    format!(
        "postgres://{}:{}@{}:{}/{}",
        *DB_USER, *DB_PASSWORD, *DB_HOST, *DB_PORT, *DB_NAME
    )
}

pub fn initialize_all() {
    lazy_static::initialize(&NUM_WEB_WORKERS);
    lazy_static::initialize(&BIND_ADDR);

    lazy_static::initialize(&DB_HOST);
    lazy_static::initialize(&DB_PORT);
    lazy_static::initialize(&DB_USER);
    lazy_static::initialize(&DB_PASSWORD);
    lazy_static::initialize(&DB_NAME);
    lazy_static::initialize(&DB_POOL_MAX_CONNS);
    lazy_static::initialize(&DB_RUN_MIGRATIONS);

    lazy_static::initialize(&PRODUCTION);
    lazy_static::initialize(&HANDLE_CORS);
    lazy_static::initialize(&STATIC_PATH);
}

pub fn print_all() {
    info!(
        "config: Database: {} at {}:{} ({} max connections)",
        *DB_NAME, *DB_HOST, *DB_PORT, *DB_POOL_MAX_CONNS
    );

    info!("config: Listening on: {}", *BIND_ADDR);
    info!("config: Frontend served from: {}", *STATIC_PATH);

    if !*PRODUCTION {
        warn!("PRODUCTION is false, session cookies will not be marked `secure`!");
    }
}
