//! Client of a hosted table store speaking the PostgREST dialect.

use std::time::Duration;

use reqwest::{
    blocking::{Client, RequestBuilder, Response},
    StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use slugloo_boundary as json;
use slugloo_core::{
    entities::*,
    repositories::{BathroomRepo, Error as RepoError, ReviewRepo},
};

type Result<T> = std::result::Result<T, RepoError>;

const BATHROOMS: &str = "bathrooms";
const REVIEWS: &str = "reviews";

#[derive(Debug, Clone)]
pub struct TableStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TableStore {
    pub fn try_new(base_url: &str, api_key: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{table}", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    fn select<T: DeserializeOwned>(&self, table: &str, query: &[(&str, String)]) -> Result<Vec<T>> {
        let request = self
            .client
            .get(self.table_url(table))
            .query(&[("select", "*")])
            .query(query);
        let response = self.authorized(request).send().map_err(other)?;
        read_rows(response)
    }

    fn insert<B, T>(&self, table: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(body);
        let response = self.authorized(request).send().map_err(other)?;
        read_rows(response)?
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Other(anyhow::anyhow!("No row returned from {table}")))
    }
}

fn other<E>(err: E) -> RepoError
where
    E: std::error::Error + Send + Sync + 'static,
{
    RepoError::Other(err.into())
}

fn read_rows<T: DeserializeOwned>(response: Response) -> Result<Vec<T>> {
    let status = response.status();
    log::debug!("Table store response: {status}");
    if status.is_success() {
        return response.json().map_err(other);
    }
    let body = response.text().map_err(other)?;
    Err(error_from_response(status, &body))
}

fn error_from_response(status: StatusCode, body: &str) -> RepoError {
    if status == StatusCode::CONFLICT {
        return RepoError::AlreadyExists;
    }
    let message = serde_json::from_str::<json::StoreError>(body)
        .map(|err| err.message)
        .unwrap_or_else(|_| format!("{status}"));
    log::debug!("Table store rejected the request ({status}): {body}");
    RepoError::Rejected(message)
}

fn eq(value: &str) -> String {
    format!("eq.{value}")
}

impl BathroomRepo for TableStore {
    fn all_bathrooms(&self) -> Result<Vec<Bathroom>> {
        let rows: Vec<json::Bathroom> = self.select(BATHROOMS, &[])?;
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id.to_string();
                Bathroom::try_from(row)
                    .map_err(|err| log::warn!("Skipping bathroom {id}: {err}"))
                    .ok()
            })
            .collect())
    }

    fn get_bathroom(&self, id: &str) -> Result<Bathroom> {
        let row = self
            .select::<json::Bathroom>(BATHROOMS, &[("id", eq(id))])?
            .into_iter()
            .next()
            .ok_or(RepoError::NotFound)?;
        Bathroom::try_from(row).map_err(other)
    }

    fn create_bathroom(&self, bathroom: &BathroomDraft) -> Result<Bathroom> {
        let body = json::NewBathroom::from(bathroom.clone());
        let row: json::Bathroom = self.insert(BATHROOMS, &body)?;
        let bathroom = Bathroom::try_from(row).map_err(other)?;
        log::debug!("Stored bathroom {}", bathroom.id);
        Ok(bathroom)
    }
}

impl ReviewRepo for TableStore {
    fn load_reviews_of_bathroom(&self, bathroom_id: &str) -> Result<Vec<Review>> {
        let rows: Vec<json::Review> = self.select(
            REVIEWS,
            &[
                ("bathroom_id", eq(bathroom_id)),
                ("order", "created_at.desc".to_owned()),
            ],
        )?;
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id.to_string();
                Review::try_from(row)
                    .map_err(|err| log::warn!("Skipping review {id}: {err}"))
                    .ok()
            })
            .collect())
    }

    fn create_review(&self, review: &ReviewDraft) -> Result<Review> {
        let body = json::NewReview::from(review.clone());
        let row: json::Review = self.insert(REVIEWS, &body)?;
        Review::try_from(row).map_err(other)
    }
}
