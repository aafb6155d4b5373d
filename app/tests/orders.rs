mod common;

use app::modules::order::dto::{CreateOrderCommentDto, CreateOrderDto, CreateOrderLineDto};
use app::modules::order::repository as orders;
use app::modules::service::dto::CreateServiceDto;
use app::modules::service::repository as services;
use chrono::{Duration, Utc};
use entity::order::OrderStatus;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

async fn service_with_price(
    db: &DatabaseConnection,
    name: &str,
    price: i32,
) -> entity::service::Model {
    services::create_service(
        db,
        &CreateServiceDto {
            name: String::from(name),
            price,
        },
    )
    .await
    .unwrap()
}

async fn empty_order(db: &DatabaseConnection) -> entity::order::Model {
    orders::create_order(
        db,
        &CreateOrderDto {
            vehicle_id: None,
            client_id: None,
            deadline: None,
            status: None,
        },
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn order_total_sums_every_line() {
    let db = common::test_db().await;
    let order = empty_order(&db).await;

    let oil_change = service_with_price(&db, "Tepalų keitimas", 10).await;
    let tire_fitting = service_with_price(&db, "Padangų montavimas", 5).await;

    orders::add_order_line(
        &db,
        order.id,
        &CreateOrderLineDto {
            service_id: oil_change.id,
            quantity: 2,
        },
    )
    .await
    .unwrap();

    orders::add_order_line(
        &db,
        order.id,
        &CreateOrderLineDto {
            service_id: tire_fitting.id,
            quantity: 3,
        },
    )
    .await
    .unwrap();

    assert_eq!(orders::order_total(&db, order.id).await.unwrap(), 35);
}

#[tokio::test]
async fn order_total_is_zero_without_lines() {
    let db = common::test_db().await;
    let order = empty_order(&db).await;

    assert_eq!(orders::order_total(&db, order.id).await.unwrap(), 0);
}

#[tokio::test]
async fn orders_default_to_the_confirming_status() {
    let db = common::test_db().await;
    let order = empty_order(&db).await;

    assert_eq!(order.status, OrderStatus::Confirming);

    let reloaded = orders::find_order_by_id(&db, order.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(reloaded.status, OrderStatus::Confirming);
}

#[tokio::test]
async fn deleting_a_service_nulls_line_references() {
    let db = common::test_db().await;
    let order = empty_order(&db).await;

    let diagnostics = service_with_price(&db, "Variklio diagnostika", 35).await;

    let line = orders::add_order_line(
        &db,
        order.id,
        &CreateOrderLineDto {
            service_id: diagnostics.id,
            quantity: 1,
        },
    )
    .await
    .unwrap();

    services::delete_service(&db, diagnostics.id).await.unwrap();

    let line = entity::order_line::Entity::find_by_id(line.id)
        .one(&db)
        .await
        .unwrap()
        .expect("line must survive the service deletion");

    assert_eq!(line.service_id, None);

    // with the reference gone the sums fail instead of reporting zero
    assert!(orders::line_sum(&db, &line).await.is_err());
    assert!(orders::order_total(&db, order.id).await.is_err());
}

#[tokio::test]
async fn deleting_an_order_cascades_to_lines_and_comments() {
    let db = common::test_db().await;
    let order = empty_order(&db).await;

    let inspection = service_with_price(&db, "Techninė apžiūra", 20).await;

    orders::add_order_line(
        &db,
        order.id,
        &CreateOrderLineDto {
            service_id: inspection.id,
            quantity: 1,
        },
    )
    .await
    .unwrap();

    orders::add_order_comment(
        &db,
        order.id,
        &CreateOrderCommentDto {
            content: String::from("laukiam detalių"),
            author_id: None,
        },
    )
    .await
    .unwrap();

    orders::delete_order(&db, order.id).await.unwrap();

    let remaining_lines = entity::order_line::Entity::find()
        .filter(entity::order_line::Column::OrderId.eq(order.id))
        .all(&db)
        .await
        .unwrap();

    let remaining_comments = entity::order_comment::Entity::find()
        .filter(entity::order_comment::Column::OrderId.eq(order.id))
        .all(&db)
        .await
        .unwrap();

    assert!(remaining_lines.is_empty());
    assert!(remaining_comments.is_empty());

    // the service itself is independent and must survive
    assert!(services::find_service_by_id(&db, inspection.id)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn comments_are_listed_newest_first() {
    let db = common::test_db().await;
    let order = empty_order(&db).await;

    let older = entity::order_comment::ActiveModel {
        date_created: Set(Utc::now() - Duration::hours(2)),
        content: Set(String::from("priimta")),
        order_id: Set(order.id),
        author_id: Set(None),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let newer = entity::order_comment::ActiveModel {
        date_created: Set(Utc::now() - Duration::hours(1)),
        content: Set(String::from("darbai pradėti")),
        order_id: Set(order.id),
        author_id: Set(None),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let comments = orders::order_comments(&db, order.id).await.unwrap();

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
}
