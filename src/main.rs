use actix_cors::Cors;
use actix_files::Files;
use actix_web::{
    middleware::{Condition, Logger},
    web::{self, Data},
    App, HttpServer,
};
use log::{error, info};
use sqlx::postgres::PgPoolOptions;
use utoipa_rapidoc::RapiDoc;

use gym_server::{
    apidocs, auth, dashboard, db::Database, gate::AccessGate, metrics, options, payments, programs,
    users, workouts,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    options::initialize_all();
    options::print_all();

    // database
    let conn_string = options::db_conn_string();
    let pool = PgPoolOptions::new()
        .max_connections(*options::DB_POOL_MAX_CONNS)
        .connect(&conn_string);

    let pool = match pool.await {
        Ok(pool) => {
            info!("Connected to database successfully!");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if *options::DB_RUN_MIGRATIONS {
        if let Err(e) = sqlx::migrate!().run(&pool).await {
            error!("Failed to run migrations: {}", e);
            std::process::exit(1);
        }
        info!("Migrations are up to date");
    }

    let db = Data::new(Database::with_pool(pool));

    HttpServer::new(move || {
        // middleware executes in reverse registration order: logging first,
        // then CORS, then the navigation gate
        App::new()
            .wrap(AccessGate)
            .wrap(Condition::new(*options::HANDLE_CORS, Cors::permissive()))
            .wrap(Logger::new("%{r}a %r -> %s in %Dms").log_target("http"))
            .app_data(Data::clone(&db))
            .service(
                web::scope("/api")
                    .configure(auth::routes::configure_app)
                    .configure(users::routes::configure_app)
                    .configure(programs::routes::configure_app)
                    .configure(workouts::routes::configure_app)
                    .configure(metrics::routes::configure_app)
                    .configure(payments::routes::configure_app)
                    .configure(dashboard::routes::configure_app),
            )
            .service(
                RapiDoc::with_openapi("/api/docs/openapi.json", apidocs::setup_oapi())
                    .path("/api/docs"),
            )
            // the page routes the gate allows through land on the frontend
            // bundle
            .service(Files::new("/", options::STATIC_PATH.as_str()).index_file("index.html"))
    })
    .workers(*options::NUM_WEB_WORKERS)
    .bind(*options::BIND_ADDR)?
    .run()
    .await
}
