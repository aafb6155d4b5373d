use super::dto::{CreateServiceDto, ListServicesDto, UpdateServiceDto};
use crate::database::helpers::paginated_query_to_pagination_result;
use crate::modules::common::dto::{Pagination, PaginationResult};
use chrono::Utc;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QueryTrait, Set, UpdateResult,
};

pub async fn create_service(
    conn: &DatabaseConnection,
    dto: &CreateServiceDto,
) -> Result<entity::service::Model, DbErr> {
    let service = entity::service::ActiveModel {
        created_at: Set(Utc::now()),
        name: Set(dto.name.clone()),
        price: Set(dto.price),
        ..Default::default()
    };

    service.insert(conn).await
}

pub async fn find_service_by_id(
    conn: &DatabaseConnection,
    id: i32,
) -> Result<Option<entity::service::Model>, DbErr> {
    entity::service::Entity::find_by_id(id).one(conn).await
}

pub async fn update_service(
    conn: &DatabaseConnection,
    id: i32,
    dto: &UpdateServiceDto,
) -> Result<UpdateResult, DbErr> {
    entity::service::Entity::update_many()
        .apply_if(dto.name.clone(), |query, v| {
            query.col_expr(entity::service::Column::Name, Expr::value(v))
        })
        .apply_if(dto.price, |query, v| {
            query.col_expr(entity::service::Column::Price, Expr::value(v))
        })
        .filter(entity::service::Column::Id.eq(id))
        .exec(conn)
        .await
}

/// Deletes a service from the catalog.
///
/// order lines referencing it are kept, their service reference is
/// nulled out by the storage layer.
pub async fn delete_service(conn: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
    entity::service::Entity::delete_by_id(id).exec(conn).await
}

pub async fn list_services(
    conn: &DatabaseConnection,
    filter: &ListServicesDto,
    pagination: Pagination,
) -> Result<PaginationResult<entity::service::Model>, DbErr> {
    let paginator = entity::service::Entity::find()
        .apply_if(filter.name.clone(), |query, name| {
            query.filter(entity::service::Column::Name.contains(&name))
        })
        .order_by_asc(entity::service::Column::Id)
        .paginate(conn, pagination.page_size);

    paginated_query_to_pagination_result(paginator, pagination).await
}
