use crate::modules::common::error::RepositoryError;
use crate::services::media::service::{MediaStorage, DEFAULT_PROFILE_PIC, PROFILE_PICS_FOLDER};
use chrono::Utc;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

/// Creates the profile of a user, with the placeholder photo.
pub async fn create_profile(
    conn: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::profile::Model, DbErr> {
    let profile = entity::profile::ActiveModel {
        created_at: Set(Utc::now()),
        user_id: Set(user_id),
        ..Default::default()
    };

    profile.insert(conn).await
}

pub async fn find_profile_by_user_id(
    conn: &DatabaseConnection,
    user_id: i32,
) -> Result<Option<entity::profile::Model>, DbErr> {
    entity::profile::Entity::find()
        .filter(entity::profile::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

/// Replaces the profile photo, storing the new file under the
/// `profile_pics` media folder before updating the row.
///
/// once the row points at the new file, the stored photo is shrunk in
/// place to fit within 300x300 pixels, a decode failure at that stage
/// propagates to the caller.
pub async fn set_profile_photo(
    conn: &DatabaseConnection,
    media: &MediaStorage,
    profile: &entity::profile::Model,
    filename: &str,
    contents: &[u8],
) -> Result<String, RepositoryError> {
    let key = media.store(PROFILE_PICS_FOLDER, filename, contents).await?;

    let update_result = entity::profile::Entity::update_many()
        .col_expr(entity::profile::Column::Photo, Expr::value(key.clone()))
        .filter(entity::profile::Column::Id.eq(profile.id))
        .exec(conn)
        .await;

    if let Err(err) = update_result {
        let _ = media.delete(&key).await;

        return Err(err.into());
    }

    if profile.photo != DEFAULT_PROFILE_PIC {
        let _ = media.delete(&profile.photo).await;
    }

    media.normalize_profile_photo(&key)?;

    Ok(key)
}

/// Resets the profile photo to the placeholder, removing the stored
/// file.
pub async fn clear_profile_photo(
    conn: &DatabaseConnection,
    media: &MediaStorage,
    profile: &entity::profile::Model,
) -> Result<(), RepositoryError> {
    if profile.photo == DEFAULT_PROFILE_PIC {
        return Ok(());
    }

    entity::profile::Entity::update_many()
        .col_expr(
            entity::profile::Column::Photo,
            Expr::value(DEFAULT_PROFILE_PIC),
        )
        .filter(entity::profile::Column::Id.eq(profile.id))
        .exec(conn)
        .await
        .map_err(RepositoryError::from)?;

    let _ = media.delete(&profile.photo).await;

    Ok(())
}
