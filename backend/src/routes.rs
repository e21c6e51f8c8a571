use rocket::{State, get, post, http::Status, serde::json::Json};
use rocket::response::stream::{Event, EventStream};
use rocket::Shutdown;
use sqlx::PgPool;
use tokio::select;
use tokio::sync::broadcast::{self, error::RecvError, Sender};
use tracing::{debug, error, instrument};
use shared::error::ErrorResponse;
use shared::{candidates, models::*, ClientInfo};
use crate::{
    error::ApiError,
    queries::Queries,
    rate_limiter::RateLimiter,
};

const CAST_VOTE_WINDOW_MINUTES: i64 = 1;
// Generous: a device legitimately holds at most 2 + 7 votes.
const CAST_VOTE_MAX_PER_WINDOW: u32 = 9;
const INSERT_CHANNEL_CAPACITY: usize = 64;

pub struct AppState {
    pub vote_limiter: RateLimiter,
    pub inserts: Sender<()>,
    pub db: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let (inserts, _) = broadcast::channel(INSERT_CHANNEL_CAPACITY);
        Self {
            vote_limiter: RateLimiter::new(CAST_VOTE_MAX_PER_WINDOW, CAST_VOTE_WINDOW_MINUTES),
            inserts,
            db: pool,
        }
    }
}

#[instrument(skip(state, vote, client))]
#[post("/votes", format = "json", data = "<vote>")]
pub async fn cast_vote(
    state: &State<AppState>,
    vote: Json<NewVote>,
    client: ClientInfo,
) -> Result<Json<VoteRecord>, (Status, Json<ErrorResponse>)> {
    let vote = vote.into_inner();

    let candidate = match candidates::find(&vote.candidate_id) {
        Some(candidate) => candidate,
        None => {
            return Err((Status::BadRequest, Json(ErrorResponse {
                error: format!("Unknown candidate: {}", vote.candidate_id),
            })));
        }
    };

    if candidate.category != vote.category {
        return Err((Status::BadRequest, Json(ErrorResponse {
            error: format!("{} is not running for {}", candidate.name, vote.category),
        })));
    }

    let rate_limit_key = format!("cast_vote:{}", client.fingerprint);
    if let Err(e) = state.vote_limiter.check(&rate_limit_key) {
        return Err((Status::TooManyRequests, Json(e)));
    }

    let record = Queries::insert_vote(&state.db, &vote).await.map_err(|e| {
        error!("Failed to store vote for {}: {}", vote.candidate_id, e);
        (Status::InternalServerError, Json(ErrorResponse {
            error: "Failed to save vote".into(),
        }))
    })?;

    debug!("Stored vote {} for {}", record.id, record.candidate_id);

    // No receivers is fine; subscribers catch up from the next fetch.
    let _ = state.inserts.send(());

    Ok(Json(record))
}

#[get("/votes?<category>")]
pub async fn list_votes(
    state: &State<AppState>,
    category: Option<&str>,
) -> Result<Json<Vec<VoteRecord>>, ApiError> {
    let category = match category {
        Some(raw) => Some(raw.parse::<Category>().map_err(|_| ApiError::InvalidCategory)?),
        None => None,
    };
    Queries::list_votes(&state.db, category).await.map(Json)
}

#[get("/votes/candidate/<id>")]
pub async fn votes_for_candidate(
    state: &State<AppState>,
    id: &str,
) -> Result<Json<Vec<VoteRecord>>, ApiError> {
    if candidates::find(id).is_none() {
        return Err(ApiError::UnknownCandidate);
    }
    Queries::votes_for_candidate(&state.db, id).await.map(Json)
}

/// One empty `vote` event per stored row. Events carry no payload; clients
/// refetch the ledger and recompute counts on each.
#[get("/votes/events")]
pub async fn vote_events(state: &State<AppState>, mut end: Shutdown) -> EventStream![] {
    let mut inserts = state.inserts.subscribe();
    EventStream! {
        loop {
            select! {
                msg = inserts.recv() => match msg {
                    Ok(()) => yield Event::empty().event("vote"),
                    // Dropped notifications still mean new rows exist.
                    Err(RecvError::Lagged(_)) => yield Event::empty().event("vote"),
                    Err(RecvError::Closed) => break,
                },
                _ = &mut end => break,
            }
        }
    }
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}
