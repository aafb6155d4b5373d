use super::dto::{
    CreateOrderCommentDto, CreateOrderDto, CreateOrderLineDto, ListOrdersDto, UpdateOrderDto,
};
use crate::database::helpers::paginated_query_to_pagination_result;
use crate::modules::common::dto::{Pagination, PaginationResult};
use chrono::Utc;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QueryTrait, Set, UpdateResult,
};

pub async fn create_order(
    conn: &DatabaseConnection,
    dto: &CreateOrderDto,
) -> Result<entity::order::Model, DbErr> {
    let order = entity::order::ActiveModel {
        date: Set(Utc::now()),
        deadline: Set(dto.deadline),
        status: Set(dto.status.unwrap_or_default()),
        vehicle_id: Set(dto.vehicle_id),
        client_id: Set(dto.client_id),
        ..Default::default()
    };

    order.insert(conn).await
}

pub async fn find_order_by_id(
    conn: &DatabaseConnection,
    id: i32,
) -> Result<Option<entity::order::Model>, DbErr> {
    entity::order::Entity::find_by_id(id).one(conn).await
}

pub async fn update_order(
    conn: &DatabaseConnection,
    id: i32,
    dto: &UpdateOrderDto,
) -> Result<UpdateResult, DbErr> {
    entity::order::Entity::update_many()
        .apply_if(dto.deadline, |query, v| {
            query.col_expr(entity::order::Column::Deadline, Expr::value(v))
        })
        .apply_if(dto.status, |query, v| {
            query.col_expr(entity::order::Column::Status, Expr::value(v))
        })
        .apply_if(dto.vehicle_id, |query, v| {
            query.col_expr(entity::order::Column::VehicleId, Expr::value(v))
        })
        .apply_if(dto.client_id, |query, v| {
            query.col_expr(entity::order::Column::ClientId, Expr::value(v))
        })
        .filter(entity::order::Column::Id.eq(id))
        .exec(conn)
        .await
}

/// Deletes an order together with its lines and comments, which are
/// dropped by the storage layer cascade.
pub async fn delete_order(conn: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
    entity::order::Entity::delete_by_id(id).exec(conn).await
}

pub async fn list_orders(
    conn: &DatabaseConnection,
    filter: &ListOrdersDto,
    pagination: Pagination,
) -> Result<PaginationResult<entity::order::Model>, DbErr> {
    let paginator = entity::order::Entity::find()
        .apply_if(filter.status, |query, status| {
            query.filter(entity::order::Column::Status.eq(status))
        })
        .apply_if(filter.vehicle_id, |query, vehicle_id| {
            query.filter(entity::order::Column::VehicleId.eq(vehicle_id))
        })
        .order_by_desc(entity::order::Column::Date)
        .paginate(conn, pagination.page_size);

    paginated_query_to_pagination_result(paginator, pagination).await
}

pub async fn add_order_line(
    conn: &DatabaseConnection,
    order_id: i32,
    dto: &CreateOrderLineDto,
) -> Result<entity::order_line::Model, DbErr> {
    let line = entity::order_line::ActiveModel {
        order_id: Set(order_id),
        service_id: Set(Some(dto.service_id)),
        quantity: Set(dto.quantity),
        ..Default::default()
    };

    line.insert(conn).await
}

pub async fn remove_order_line(
    conn: &DatabaseConnection,
    line_id: i32,
) -> Result<DeleteResult, DbErr> {
    entity::order_line::Entity::delete_by_id(line_id).exec(conn).await
}

pub async fn order_lines(
    conn: &DatabaseConnection,
    order_id: i32,
) -> Result<Vec<entity::order_line::Model>, DbErr> {
    entity::order_line::Entity::find()
        .filter(entity::order_line::Column::OrderId.eq(order_id))
        .order_by_asc(entity::order_line::Column::Id)
        .all(conn)
        .await
}

/// Price of a single line: the referenced service price times the
/// quantity.
///
/// fails with `DbErr::RecordNotFound` when the line no longer points
/// to a service (it was deleted and the reference nulled out), a zero
/// fallback here would silently corrupt order totals.
pub async fn line_sum(
    conn: &DatabaseConnection,
    line: &entity::order_line::Model,
) -> Result<i64, DbErr> {
    let service = line
        .find_related(entity::service::Entity)
        .one(conn)
        .await?
        .ok_or_else(|| {
            DbErr::RecordNotFound(format!("order line {} references no service", line.id))
        })?;

    Ok(i64::from(service.price) * i64::from(line.quantity))
}

/// Sum of every line of the order, `0` for an order with no lines.
pub async fn order_total(conn: &DatabaseConnection, order_id: i32) -> Result<i64, DbErr> {
    let lines = entity::order_line::Entity::find()
        .filter(entity::order_line::Column::OrderId.eq(order_id))
        .find_also_related(entity::service::Entity)
        .all(conn)
        .await?;

    let mut total = 0;

    for (line, service) in lines {
        let service = service.ok_or_else(|| {
            DbErr::RecordNotFound(format!("order line {} references no service", line.id))
        })?;

        total += i64::from(service.price) * i64::from(line.quantity);
    }

    Ok(total)
}

pub async fn add_order_comment(
    conn: &DatabaseConnection,
    order_id: i32,
    dto: &CreateOrderCommentDto,
) -> Result<entity::order_comment::Model, DbErr> {
    let comment = entity::order_comment::ActiveModel {
        date_created: Set(Utc::now()),
        content: Set(dto.content.clone()),
        order_id: Set(order_id),
        author_id: Set(dto.author_id),
        ..Default::default()
    };

    comment.insert(conn).await
}

/// Comments of an order, newest first.
pub async fn order_comments(
    conn: &DatabaseConnection,
    order_id: i32,
) -> Result<Vec<entity::order_comment::Model>, DbErr> {
    entity::order_comment::Entity::find()
        .filter(entity::order_comment::Column::OrderId.eq(order_id))
        .order_by_desc(entity::order_comment::Column::DateCreated)
        .all(conn)
        .await
}
