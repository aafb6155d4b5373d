use super::dto::{CreateVehicleDto, ListVehiclesDto, UpdateVehicleDto};
use crate::database::helpers::paginated_query_to_pagination_result;
use crate::modules::common::dto::{Pagination, PaginationResult};
use crate::modules::common::error::RepositoryError;
use crate::services::media::service::{MediaStorage, VEHICLE_PHOTOS_FOLDER};
use chrono::Utc;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QueryTrait, Set, UpdateResult,
};

pub async fn create_vehicle(
    conn: &DatabaseConnection,
    dto: &CreateVehicleDto,
) -> Result<entity::vehicle::Model, DbErr> {
    let vehicle = entity::vehicle::ActiveModel {
        created_at: Set(Utc::now()),
        plate: Set(dto.plate.clone()),
        vin: Set(dto.vin.clone()),
        owner_name: Set(dto.owner_name.clone()),
        description: Set(dto.description.clone()),
        owner_id: Set(dto.owner_id),
        vehicle_model_id: Set(dto.vehicle_model_id),
        ..Default::default()
    };

    vehicle.insert(conn).await
}

pub async fn find_vehicle_by_id(
    conn: &DatabaseConnection,
    id: i32,
) -> Result<Option<entity::vehicle::Model>, DbErr> {
    entity::vehicle::Entity::find_by_id(id).one(conn).await
}

pub async fn update_vehicle(
    conn: &DatabaseConnection,
    id: i32,
    dto: &UpdateVehicleDto,
) -> Result<UpdateResult, DbErr> {
    entity::vehicle::Entity::update_many()
        .apply_if(dto.plate.clone(), |query, v| {
            query.col_expr(entity::vehicle::Column::Plate, Expr::value(v))
        })
        .apply_if(dto.vin.clone(), |query, v| {
            query.col_expr(entity::vehicle::Column::Vin, Expr::value(v))
        })
        .apply_if(dto.owner_name.clone(), |query, v| {
            query.col_expr(entity::vehicle::Column::OwnerName, Expr::value(v))
        })
        .apply_if(dto.description.clone(), |query, v| {
            query.col_expr(entity::vehicle::Column::Description, Expr::value(v))
        })
        .apply_if(dto.owner_id, |query, v| {
            query.col_expr(entity::vehicle::Column::OwnerId, Expr::value(v))
        })
        .apply_if(dto.vehicle_model_id, |query, v| {
            query.col_expr(entity::vehicle::Column::VehicleModelId, Expr::value(v))
        })
        .filter(entity::vehicle::Column::Id.eq(id))
        .exec(conn)
        .await
}

/// Deletes a vehicle.
///
/// orders referencing it are kept, their vehicle reference is nulled
/// out by the storage layer.
pub async fn delete_vehicle(conn: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
    entity::vehicle::Entity::delete_by_id(id).exec(conn).await
}

pub async fn list_vehicles(
    conn: &DatabaseConnection,
    filter: &ListVehiclesDto,
    pagination: Pagination,
) -> Result<PaginationResult<entity::vehicle::Model>, DbErr> {
    let paginator = entity::vehicle::Entity::find()
        .apply_if(filter.plate.clone(), |query, plate| {
            query.filter(entity::vehicle::Column::Plate.contains(&plate))
        })
        .order_by_asc(entity::vehicle::Column::Id)
        .paginate(conn, pagination.page_size);

    paginated_query_to_pagination_result(paginator, pagination).await
}

/// Replaces the vehicle photo, storing the new file under the
/// `vehicles` media folder before updating the row.
///
/// the stored file is removed again if the row update fails, and the
/// previous photo is removed once the replacement is in place.
pub async fn set_vehicle_photo(
    conn: &DatabaseConnection,
    media: &MediaStorage,
    vehicle: &entity::vehicle::Model,
    filename: &str,
    contents: &[u8],
) -> Result<String, RepositoryError> {
    let key = media.store(VEHICLE_PHOTOS_FOLDER, filename, contents).await?;

    let update_result = entity::vehicle::Entity::update_many()
        .col_expr(entity::vehicle::Column::Photo, Expr::value(key.clone()))
        .filter(entity::vehicle::Column::Id.eq(vehicle.id))
        .exec(conn)
        .await;

    if let Err(err) = update_result {
        let _ = media.delete(&key).await;

        return Err(err.into());
    }

    if let Some(old_photo) = &vehicle.photo {
        let _ = media.delete(old_photo).await;
    }

    Ok(key)
}
