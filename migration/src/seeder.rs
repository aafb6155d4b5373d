use chrono::{Duration, Utc};
use entity::{
    order, order_comment, order_line, profile, service, user, vehicle, vehicle_model,
};
use fake::{faker, Fake};
use rand::{seq::SliceRandom, Rng};
use sea_orm_migration::{
    sea_orm::{ActiveModelTrait, DatabaseTransaction, Iterable, Set},
    DbErr,
};

use crate::seeder_consts;

const ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMERIC: &str = "0123456789";

/// VIN charset, letters I, O and Q are not used in VINs
const VIN_CHARS: &str = "ABCDEFGHJKLMNPRSTUVWXYZ0123456789";

fn fake_words(range: std::ops::Range<usize>) -> String {
    faker::lorem::en::Words(range)
        .fake::<Vec<String>>()
        .join(" ")
}

/// Creates a lithuanian vehicle plate in the `AAA999` format, where:
///
/// - A = uppercase alphabetic characters
/// - 9 = numbers 0 to 9
fn fake_lt_vehicle_plate() -> String {
    let a: String = fake::StringFaker::with(Vec::from(ALPHA), 3).fake();
    let b: String = fake::StringFaker::with(Vec::from(NUMERIC), 3).fake();

    a + b.as_str()
}

fn fake_vin() -> String {
    fake::StringFaker::with(Vec::from(VIN_CHARS), 17).fake()
}

/// Creates a random boolean with a certain % of chance to be `true`
fn fake_bool_with_chance(chance_to_be_true: u8) -> bool {
    let n = rand::thread_rng().gen_range(0..100);

    n < chance_to_be_true
}

pub async fn user(db: &DatabaseTransaction) -> Result<user::Model, DbErr> {
    let u = user::ActiveModel {
        created_at: Set(Utc::now()),
        username: Set(faker::internet::en::Username().fake::<String>()),
        email: Set(faker::internet::en::SafeEmail().fake::<String>()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(u)
}

pub async fn profile(db: &DatabaseTransaction, user_id: i32) -> Result<profile::Model, DbErr> {
    let p = profile::ActiveModel {
        created_at: Set(Utc::now()),
        user_id: Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(p)
}

pub async fn vehicle_model(
    db: &DatabaseTransaction,
    make: &str,
    model: &str,
) -> Result<vehicle_model::Model, DbErr> {
    let m = vehicle_model::ActiveModel {
        created_at: Set(Utc::now()),
        make: Set(String::from(make)),
        model: Set(String::from(model)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(m)
}

pub async fn service(
    db: &DatabaseTransaction,
    name: &str,
    price: i32,
) -> Result<service::Model, DbErr> {
    let s = service::ActiveModel {
        created_at: Set(Utc::now()),
        name: Set(String::from(name)),
        price: Set(price),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(s)
}

pub async fn vehicle(
    db: &DatabaseTransaction,
    vehicle_model_id: Option<i32>,
    owner_id: Option<i32>,
) -> Result<vehicle::Model, DbErr> {
    let description = if fake_bool_with_chance(40) {
        Some(fake_words(3..10))
    } else {
        None
    };

    let v = vehicle::ActiveModel {
        created_at: Set(Utc::now()),
        plate: Set(fake_lt_vehicle_plate()),
        vin: Set(fake_vin()),
        owner_name: Set(faker::name::en::Name().fake::<String>()),
        description: Set(description),
        owner_id: Set(owner_id),
        vehicle_model_id: Set(vehicle_model_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(v)
}

pub async fn order(
    db: &DatabaseTransaction,
    vehicle_id: Option<i32>,
    client_id: Option<i32>,
) -> Result<order::Model, DbErr> {
    let statuses: Vec<order::OrderStatus> = order::OrderStatus::iter().collect();

    let status = *statuses
        .choose(&mut rand::thread_rng())
        .unwrap_or(&order::OrderStatus::Confirming);

    let deadline = if fake_bool_with_chance(70) {
        let days = rand::thread_rng().gen_range(-5..30);
        Some(Utc::now() + Duration::days(days))
    } else {
        None
    };

    let o = order::ActiveModel {
        date: Set(Utc::now()),
        deadline: Set(deadline),
        status: Set(status),
        vehicle_id: Set(vehicle_id),
        client_id: Set(client_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(o)
}

pub async fn order_line(
    db: &DatabaseTransaction,
    order_id: i32,
    service_id: i32,
) -> Result<order_line::Model, DbErr> {
    let quantity = rand::thread_rng().gen_range(1..4);
    let l = order_line::ActiveModel {
        order_id: Set(order_id),
        service_id: Set(Some(service_id)),
        quantity: Set(quantity),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(l)
}

pub async fn order_comment(
    db: &DatabaseTransaction,
    order_id: i32,
    author_id: Option<i32>,
) -> Result<order_comment::Model, DbErr> {
    let c = order_comment::ActiveModel {
        date_created: Set(Utc::now()),
        content: Set(fake_words(4..25)),
        order_id: Set(order_id),
        author_id: Set(author_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(c)
}

/// Seeds the service catalog verbatim from the consts
pub async fn service_catalog(db: &DatabaseTransaction) -> Result<Vec<service::Model>, DbErr> {
    let mut services = vec![];

    for (name, price) in seeder_consts::SERVICES {
        services.push(service(db, name, *price).await?);
    }

    Ok(services)
}

/// Seeds every vehicle model from the consts
pub async fn known_vehicle_models(
    db: &DatabaseTransaction,
) -> Result<Vec<vehicle_model::Model>, DbErr> {
    let mut models = vec![];

    for (make, model) in seeder_consts::VEHICLE_MODELS {
        models.push(vehicle_model(db, make, model).await?);
    }

    Ok(models)
}
