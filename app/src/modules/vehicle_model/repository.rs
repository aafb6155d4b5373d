use super::dto::{CreateVehicleModelDto, UpdateVehicleModelDto};
use crate::database::helpers::paginated_query_to_pagination_result;
use crate::modules::common::dto::{Pagination, PaginationResult};
use chrono::Utc;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QueryTrait, Set, UpdateResult,
};

pub async fn create_vehicle_model(
    conn: &DatabaseConnection,
    dto: &CreateVehicleModelDto,
) -> Result<entity::vehicle_model::Model, DbErr> {
    let model = entity::vehicle_model::ActiveModel {
        created_at: Set(Utc::now()),
        make: Set(dto.make.clone()),
        model: Set(dto.model.clone()),
        ..Default::default()
    };

    model.insert(conn).await
}

pub async fn find_vehicle_model_by_id(
    conn: &DatabaseConnection,
    id: i32,
) -> Result<Option<entity::vehicle_model::Model>, DbErr> {
    entity::vehicle_model::Entity::find_by_id(id).one(conn).await
}

pub async fn update_vehicle_model(
    conn: &DatabaseConnection,
    id: i32,
    dto: &UpdateVehicleModelDto,
) -> Result<UpdateResult, DbErr> {
    entity::vehicle_model::Entity::update_many()
        .apply_if(dto.make.clone(), |query, v| {
            query.col_expr(entity::vehicle_model::Column::Make, Expr::value(v))
        })
        .apply_if(dto.model.clone(), |query, v| {
            query.col_expr(entity::vehicle_model::Column::Model, Expr::value(v))
        })
        .filter(entity::vehicle_model::Column::Id.eq(id))
        .exec(conn)
        .await
}

pub async fn delete_vehicle_model(
    conn: &DatabaseConnection,
    id: i32,
) -> Result<DeleteResult, DbErr> {
    entity::vehicle_model::Entity::delete_by_id(id).exec(conn).await
}

pub async fn list_vehicle_models(
    conn: &DatabaseConnection,
    pagination: Pagination,
) -> Result<PaginationResult<entity::vehicle_model::Model>, DbErr> {
    let paginator = entity::vehicle_model::Entity::find()
        .order_by_asc(entity::vehicle_model::Column::Id)
        .paginate(conn, pagination.page_size);

    paginated_query_to_pagination_result(paginator, pagination).await
}
