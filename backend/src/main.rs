use backend::{
    routes::{all_options, cast_vote, list_votes, vote_events, votes_for_candidate, AppState},
    cors::CORS,
    catchers::{bad_request, internal_error, not_found, too_many_requests},
};
use rocket::{routes, catchers, fs::NamedFile};
use shuttle_runtime::CustomError;
use sqlx::PgPool;
use tracing::info;
use include_dir::{include_dir, Dir};
use uuid::Uuid;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

#[rocket::get("/<path..>")]
async fn spa_handler(path: std::path::PathBuf, temp_dir: &rocket::State<std::path::PathBuf>) -> Option<NamedFile> {
    let file_path = temp_dir.join(&path);
    if file_path.exists() && file_path.is_file() {
        NamedFile::open(&file_path).await.ok()
    } else {
        NamedFile::open(temp_dir.join("index.html")).await.ok()
    }
}

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_shared_db::Postgres] pool: PgPool,
) -> shuttle_rocket::ShuttleRocket {
    info!("🗳️ Starting ward vote server");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(CustomError::new)?;

    info!("📋 Migrations complete");

    let temp_dir = std::env::temp_dir().join(format!("ward_vote_static_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&temp_dir).map_err(CustomError::new)?;
    STATIC_DIR.extract(&temp_dir).map_err(CustomError::new)?;

    let rocket = rocket::build()
        .attach(CORS)
        .manage(AppState::new(pool))
        .manage(temp_dir.clone())
        .mount(
            "/api",
            routes![
                cast_vote,
                list_votes,
                votes_for_candidate,
                vote_events,
                all_options
            ],
        )
        .mount("/", routes![spa_handler])
        .register(
            "/",
            catchers![
                bad_request,
                not_found,
                too_many_requests,
                internal_error
            ],
        );

    Ok(rocket.into())
}
