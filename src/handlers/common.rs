//! Lookups and association writes shared by the entity handlers.

use crate::error::{ApiError, MsgError};
use crate::schemas::MessageResponse;
use axum::{http::StatusCode, response::Json};
use model::association::{self, Association, Link};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder, TransactionTrait,
};
use tracing::{debug, error, info, trace, warn};

/// Messages used by the association handlers for one junction.
#[derive(Debug, Clone, Copy)]
pub struct LinkLabels {
    /// Kind of the left parent, e.g. "User".
    pub left: &'static str,
    /// Kind of the right parent, e.g. "People".
    pub right: &'static str,
    pub added: &'static str,
    pub duplicate: &'static str,
    pub removed: &'static str,
}

/// Every row of `E`, ordered by primary key.
pub async fn list_all<E, C>(db: &C, kind: &str) -> Result<Vec<E::Model>, ApiError>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    trace!("Fetching all {} rows", kind);
    let mut select = E::find();
    for key in E::PrimaryKey::iter() {
        select = select.order_by_asc(key.into_column());
    }

    match select.all(db).await {
        Ok(models) => {
            debug!("Retrieved {} {} rows from database", models.len(), kind);
            Ok(models)
        }
        Err(db_error) => {
            error!("Failed to retrieve {} rows from database: {}", kind, db_error);
            Err(db_error.into())
        }
    }
}

/// The row of `E` with the given id, or a "<kind> not found" error.
pub async fn find_or_404<E, C>(db: &C, id: i32, kind: &str) -> Result<E::Model, ApiError>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    C: ConnectionTrait,
{
    trace!("Looking up {} with ID: {}", kind, id);
    match E::find_by_id(id).one(db).await {
        Ok(Some(model)) => Ok(model),
        Ok(None) => {
            warn!("{} with ID {} not found", kind, id);
            Err(ApiError::not_found(kind))
        }
        Err(db_error) => {
            error!("Failed to retrieve {} with ID {}: {}", kind, id, db_error);
            Err(db_error.into())
        }
    }
}

/// Delete the row of `E` with the given id in its own transaction. Junction
/// rows referencing it go with it through the schema's cascades.
pub async fn delete_or_404<E>(db: &DatabaseConnection, id: i32, kind: &str) -> Result<(), ApiError>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    trace!("Attempting to delete {} with ID: {}", kind, id);
    let txn = db.begin().await?;

    let delete_result = E::delete_by_id(id).exec(&txn).await.map_err(|db_error| {
        error!("Failed to delete {} with ID {}: {}", kind, id, db_error);
        ApiError::from(db_error)
    })?;
    debug!("Delete operation completed. Rows affected: {}", delete_result.rows_affected);

    if delete_result.rows_affected == 0 {
        warn!("{} with ID {} not found for deletion (no rows affected)", kind, id);
        return Err(ApiError::not_found(kind));
    }

    txn.commit().await?;
    info!("{} with ID {} deleted successfully", kind, id);
    Ok(())
}

/// Link two existing parents through junction `A`.
///
/// Both parents must exist (404 otherwise) and the pair must not be linked
/// yet (409 otherwise). Runs in a single request-scoped transaction.
pub async fn add_link<A>(
    db: &DatabaseConnection,
    left_id: i32,
    right_id: i32,
    labels: LinkLabels,
) -> Result<(StatusCode, Json<MessageResponse>), MsgError>
where
    A: Association,
    A::Model: IntoActiveModel<A::ActiveModel>,
    <A::Left as EntityTrait>::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    <A::Right as EntityTrait>::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    debug!(
        "Linking {} {} to {} {}",
        labels.left, left_id, labels.right, right_id
    );
    let txn = db.begin().await?;

    find_or_404::<A::Left, _>(&txn, left_id, labels.left).await?;
    find_or_404::<A::Right, _>(&txn, right_id, labels.right).await?;

    let outcome = association::link::<A, _>(&txn, left_id, right_id)
        .await
        .map_err(|db_error| {
            error!(
                "Failed to link {} {} to {} {}: {}",
                labels.left, left_id, labels.right, right_id, db_error
            );
            db_error
        })?;

    match outcome {
        Link::Created => {
            txn.commit().await?;
            info!(
                "Linked {} {} to {} {}",
                labels.left, left_id, labels.right, right_id
            );
            Ok((StatusCode::CREATED, Json(MessageResponse::new(labels.added))))
        }
        Link::AlreadyLinked => {
            warn!(
                "{} {} already linked to {} {}",
                labels.left, left_id, labels.right, right_id
            );
            Err(ApiError::Conflict(labels.duplicate.to_string()).into())
        }
    }
}

/// Unlink a pair through junction `A`.
///
/// Only the left parent must exist. Removing a pair that is not linked is
/// not an error.
pub async fn remove_link<A>(
    db: &DatabaseConnection,
    left_id: i32,
    right_id: i32,
    labels: LinkLabels,
) -> Result<Json<MessageResponse>, MsgError>
where
    A: Association,
    <A::Left as EntityTrait>::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    debug!(
        "Unlinking {} {} from {} {}",
        labels.right, right_id, labels.left, left_id
    );
    let txn = db.begin().await?;

    find_or_404::<A::Left, _>(&txn, left_id, labels.left).await?;

    let removed = association::unlink::<A, _>(&txn, left_id, right_id).await?;
    txn.commit().await?;

    if removed {
        info!(
            "Unlinked {} {} from {} {}",
            labels.right, right_id, labels.left, left_id
        );
    } else {
        debug!(
            "{} {} was not linked to {} {}, nothing to remove",
            labels.right, right_id, labels.left, left_id
        );
    }

    Ok(Json(MessageResponse::new(labels.removed)))
}

/// Right parents linked to an existing left parent through junction `A`.
pub async fn list_links<A>(
    db: &DatabaseConnection,
    left_id: i32,
    left_kind: &str,
) -> Result<Vec<<A::Right as EntityTrait>::Model>, MsgError>
where
    A: Association,
    <A::Left as EntityTrait>::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    find_or_404::<A::Left, _>(db, left_id, left_kind).await?;
    let related = association::related::<A, _>(db, left_id).await?;
    debug!("{} {} has {} linked rows", left_kind, left_id, related.len());
    Ok(related)
}
