mod common;

use app::modules::profile::repository as profiles;
use app::services::media::service::{MediaStorage, DEFAULT_PROFILE_PIC};
use chrono::Utc;
use image::{DynamicImage, RgbImage};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use std::io::Cursor;

async fn registered_user(db: &DatabaseConnection, username: &str) -> entity::user::Model {
    entity::user::ActiveModel {
        created_at: Set(Utc::now()),
        username: Set(String::from(username)),
        email: Set(format!("{}@example.com", username)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut buffer = Vec::new();

    DynamicImage::ImageRgb8(RgbImage::new(width, height))
        .write_to(&mut Cursor::new(&mut buffer), image::ImageOutputFormat::Png)
        .unwrap();

    buffer
}

#[tokio::test]
async fn new_profiles_get_the_placeholder_photo() {
    let db = common::test_db().await;
    let user = registered_user(&db, "jonas").await;

    let profile = profiles::create_profile(&db, user.id).await.unwrap();

    assert_eq!(profile.photo, DEFAULT_PROFILE_PIC);
}

#[tokio::test]
async fn oversized_profile_photos_are_shrunk_on_save() {
    let db = common::test_db().await;
    let user = registered_user(&db, "ruta").await;
    let profile = profiles::create_profile(&db, user.id).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let media = MediaStorage::new(dir.path());

    let key = profiles::set_profile_photo(&db, &media, &profile, "me.png", &png_bytes(600, 300))
        .await
        .unwrap();

    assert_eq!(
        image::image_dimensions(media.path_of(&key)).unwrap(),
        (300, 150)
    );

    let reloaded = profiles::find_profile_by_user_id(&db, user.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(reloaded.photo, key);
}

#[tokio::test]
async fn small_profile_photos_are_kept_as_uploaded() {
    let db = common::test_db().await;
    let user = registered_user(&db, "tomas").await;
    let profile = profiles::create_profile(&db, user.id).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let media = MediaStorage::new(dir.path());

    let key = profiles::set_profile_photo(&db, &media, &profile, "me.png", &png_bytes(200, 200))
        .await
        .unwrap();

    assert_eq!(
        image::image_dimensions(media.path_of(&key)).unwrap(),
        (200, 200)
    );
}

#[tokio::test]
async fn broken_photos_fail_the_save() {
    let db = common::test_db().await;
    let user = registered_user(&db, "migle").await;
    let profile = profiles::create_profile(&db, user.id).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let media = MediaStorage::new(dir.path());

    let result =
        profiles::set_profile_photo(&db, &media, &profile, "me.png", b"not an image").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn clearing_the_photo_restores_the_placeholder() {
    let db = common::test_db().await;
    let user = registered_user(&db, "aiste").await;
    let profile = profiles::create_profile(&db, user.id).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let media = MediaStorage::new(dir.path());

    let key = profiles::set_profile_photo(&db, &media, &profile, "me.png", &png_bytes(100, 100))
        .await
        .unwrap();

    let with_photo = profiles::find_profile_by_user_id(&db, user.id)
        .await
        .unwrap()
        .unwrap();

    profiles::clear_profile_photo(&db, &media, &with_photo)
        .await
        .unwrap();

    let cleared = profiles::find_profile_by_user_id(&db, user.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(cleared.photo, DEFAULT_PROFILE_PIC);
    assert!(!media.path_of(&key).exists());
}

#[tokio::test]
async fn deleting_a_user_cascades_to_the_profile() {
    let db = common::test_db().await;
    let user = registered_user(&db, "lukas").await;
    let profile = profiles::create_profile(&db, user.id).await.unwrap();

    user.delete(&db).await.unwrap();

    let remaining = entity::profile::Entity::find_by_id(profile.id)
        .one(&db)
        .await
        .unwrap();

    assert!(remaining.is_none());
}
