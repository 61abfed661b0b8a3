//! Generic many-to-many operations shared by every junction entity.
//!
//! A junction row links a *left* parent to a *right* parent and is keyed by
//! the pair of their ids. All operations take any [`ConnectionTrait`], so they
//! run equally on a pooled connection or inside a request transaction.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, SqlErr,
};
use tracing::{debug, trace};

/// A junction entity between two parent entities.
pub trait Association: EntityTrait {
    type Left: EntityTrait;
    type Right: EntityTrait;

    /// Column holding the left parent's id.
    fn left_column() -> Self::Column;

    /// Column holding the right parent's id.
    fn right_column() -> Self::Column;

    /// Primary key column of the right parent table.
    fn right_key() -> <Self::Right as EntityTrait>::Column;

    /// A new, unsaved junction row for the pair.
    fn pair(left_id: i32, right_id: i32) -> Self::ActiveModel;

    fn right_id(model: &Self::Model) -> i32;
}

/// Outcome of [`link`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Created,
    AlreadyLinked,
}

/// Whether the pair is already linked.
pub async fn exists<A, C>(db: &C, left_id: i32, right_id: i32) -> Result<bool, DbErr>
where
    A: Association,
    C: ConnectionTrait,
{
    let row = A::find()
        .filter(A::left_column().eq(left_id))
        .filter(A::right_column().eq(right_id))
        .one(db)
        .await?;
    Ok(row.is_some())
}

/// Link the pair unless it is already linked.
///
/// The existence check covers the common case; a unique violation raised by
/// a concurrent insert of the same pair is reported as
/// [`Link::AlreadyLinked`] as well. Foreign key violations are returned as
/// errors.
pub async fn link<A, C>(db: &C, left_id: i32, right_id: i32) -> Result<Link, DbErr>
where
    A: Association,
    A::Model: IntoActiveModel<A::ActiveModel>,
    C: ConnectionTrait,
{
    let entity = A::default();
    let table = entity.table_name();
    trace!(table, left_id, right_id, "linking pair");

    if exists::<A, C>(db, left_id, right_id).await? {
        debug!(table, left_id, right_id, "pair already linked");
        return Ok(Link::AlreadyLinked);
    }

    match A::insert(A::pair(left_id, right_id)).exec_without_returning(db).await {
        Ok(_) => Ok(Link::Created),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            debug!(table, left_id, right_id, "unique constraint caught on insert");
            Ok(Link::AlreadyLinked)
        }
        Err(e) => Err(e),
    }
}

/// Remove the pair. Returns `false` when there was nothing to remove.
pub async fn unlink<A, C>(db: &C, left_id: i32, right_id: i32) -> Result<bool, DbErr>
where
    A: Association,
    C: ConnectionTrait,
{
    let result = A::delete_many()
        .filter(A::left_column().eq(left_id))
        .filter(A::right_column().eq(right_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}

/// Every right parent linked to `left_id`, ordered by id.
pub async fn related<A, C>(
    db: &C,
    left_id: i32,
) -> Result<Vec<<A::Right as EntityTrait>::Model>, DbErr>
where
    A: Association,
    C: ConnectionTrait,
{
    let ids: Vec<i32> = A::find()
        .filter(A::left_column().eq(left_id))
        .all(db)
        .await?
        .iter()
        .map(A::right_id)
        .collect();

    if ids.is_empty() {
        return Ok(Vec::new());
    }

    <A::Right as EntityTrait>::find()
        .filter(A::right_key().is_in(ids))
        .order_by_asc(A::right_key())
        .all(db)
        .await
}
