use sqlx::PgPool;
use shared::models::{Category, NewVote, VoteRecord};
use crate::error::ApiError;

pub struct Queries;

impl Queries {
    /// Append one row. The table is insert-only; nothing ever updates or
    /// deletes a vote.
    pub async fn insert_vote(pool: &PgPool, vote: &NewVote) -> Result<VoteRecord, ApiError> {
        sqlx::query_as::<_, VoteRecord>(
            "INSERT INTO votes (candidate_id, category, voter_id)
             VALUES ($1, $2, $3)
             RETURNING id, candidate_id, category, voter_id, cast_at",
        )
        .bind(&vote.candidate_id)
        .bind(vote.category)
        .bind(&vote.voter_id)
        .fetch_one(pool)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))
    }

    pub async fn list_votes(pool: &PgPool, category: Option<Category>) -> Result<Vec<VoteRecord>, ApiError> {
        let query = match category {
            Some(category) => sqlx::query_as::<_, VoteRecord>(
                "SELECT id, candidate_id, category, voter_id, cast_at
                 FROM votes WHERE category = $1",
            )
            .bind(category),
            None => sqlx::query_as::<_, VoteRecord>(
                "SELECT id, candidate_id, category, voter_id, cast_at FROM votes",
            ),
        };

        query
            .fetch_all(pool)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))
    }

    pub async fn votes_for_candidate(pool: &PgPool, candidate_id: &str) -> Result<Vec<VoteRecord>, ApiError> {
        sqlx::query_as::<_, VoteRecord>(
            "SELECT id, candidate_id, category, voter_id, cast_at
             FROM votes WHERE candidate_id = $1",
        )
        .bind(candidate_id)
        .fetch_all(pool)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))
    }
}
