//! PostgreSQL Repository Implementation

use crate::domain::entities::{Listing, NewListing};
use crate::domain::repository::ListingRepository;
use crate::domain::value_objects::{ListingFilters, ListingStatus, ReviewDecision};
use crate::error::{ListingError, ListingResult};
use kernel::id::ListingId;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const LISTING_COLUMNS: &str = "id, title, description, price, condition, location, category, \
                               brand, model, year, image_url, status, created_at";

/// PostgreSQL-backed repository
///
/// Built without a pool when no database is configured; every call then
/// reports `StorageUnavailable`.
#[derive(Clone)]
pub struct PgListingRepository {
    pool: Option<PgPool>,
}

impl PgListingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool: Some(pool) }
    }

    pub fn unconfigured() -> Self {
        Self { pool: None }
    }

    pub fn is_configured(&self) -> bool {
        self.pool.is_some()
    }

    fn pool(&self) -> ListingResult<&PgPool> {
        self.pool.as_ref().ok_or_else(ListingError::unconfigured)
    }
}

impl ListingRepository for PgListingRepository {
    async fn create(&self, new: NewListing) -> ListingResult<Listing> {
        let listing = Listing::create(new);

        let row = sqlx::query_as::<_, ListingRow>(&format!(
            r#"
            INSERT INTO listings (
                id, title, description, price, condition, location, category,
                brand, model, year, image_url, status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {LISTING_COLUMNS}
            "#
        ))
        .bind(listing.id.into_uuid())
        .bind(&listing.title)
        .bind(&listing.description)
        .bind(listing.price)
        .bind(&listing.condition)
        .bind(&listing.location)
        .bind(&listing.category)
        .bind(&listing.brand)
        .bind(&listing.model)
        .bind(listing.year)
        .bind(&listing.image_url)
        .bind(listing.status.code())
        .bind(listing.created_at)
        .fetch_one(self.pool()?)
        .await?;

        tracing::debug!(listing_id = %listing.id, "Listing row inserted");

        row.into_listing()
    }

    async fn find_approved(&self, filters: &ListingFilters) -> ListingResult<Vec<Listing>> {
        let pool = self.pool()?;

        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
            "SELECT {LISTING_COLUMNS} FROM listings WHERE status = "
        ));
        query.push_bind(ListingStatus::Approved.code());

        for (column, value) in [
            ("category", filters.category()),
            ("location", filters.location()),
            ("brand", filters.brand()),
            ("model", filters.model()),
        ] {
            if let Some(value) = value {
                query.push(format!(" AND {column} ILIKE "));
                query.push_bind(contains_pattern(value));
                query.push(" ESCAPE '\\'");
            }
        }

        if let Some(year) = filters.year() {
            query.push(" AND year::text = ");
            query.push_bind(year.trim().to_string());
        }

        query.push(" ORDER BY created_at DESC");

        let rows = query
            .build_query_as::<ListingRow>()
            .fetch_all(pool)
            .await?;

        rows.into_iter().map(ListingRow::into_listing).collect()
    }

    async fn find_all(&self) -> ListingResult<Vec<Listing>> {
        let rows = sqlx::query_as::<_, ListingRow>(&format!(
            "SELECT {LISTING_COLUMNS} FROM listings ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool()?)
        .await?;

        rows.into_iter().map(ListingRow::into_listing).collect()
    }

    async fn find_by_id(&self, id: ListingId) -> ListingResult<Option<Listing>> {
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            "SELECT {LISTING_COLUMNS} FROM listings WHERE id = $1"
        ))
        .bind(id.into_uuid())
        .fetch_optional(self.pool()?)
        .await?;

        row.map(ListingRow::into_listing).transpose()
    }

    async fn update_status(
        &self,
        id: ListingId,
        decision: ReviewDecision,
    ) -> ListingResult<Option<Listing>> {
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            "UPDATE listings SET status = $2 WHERE id = $1 RETURNING {LISTING_COLUMNS}"
        ))
        .bind(id.into_uuid())
        .bind(decision.code())
        .fetch_optional(self.pool()?)
        .await?;

        if row.is_none() {
            tracing::debug!(listing_id = %id, "Status update matched no listing");
        }

        row.map(ListingRow::into_listing).transpose()
    }
}

/// ILIKE pattern matching `value` anywhere, with wildcards in `value` taken literally
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ListingRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    price: Option<f64>,
    condition: Option<String>,
    location: String,
    category: String,
    brand: String,
    model: String,
    year: Option<i32>,
    image_url: Option<String>,
    status: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl ListingRow {
    fn into_listing(self) -> ListingResult<Listing> {
        let status = ListingStatus::from_code(&self.status).ok_or_else(|| {
            ListingError::Internal(format!(
                "listing {} has unknown status {:?}",
                self.id, self.status
            ))
        })?;

        Ok(Listing {
            id: ListingId::from_uuid(self.id),
            title: self.title,
            description: self.description,
            price: self.price,
            condition: self.condition,
            location: self.location,
            category: self.category,
            brand: self.brand,
            model: self.model,
            year: self.year,
            image_url: self.image_url,
            status,
            created_at: self.created_at,
        })
    }
}
