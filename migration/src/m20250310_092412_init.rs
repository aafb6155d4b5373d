use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let statement = r#"
        create table "user" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "username" varchar(255) not null,
            "email" varchar(255) not null
        );

        alter table
            "user"
        add
            constraint "user_username_unique" unique ("username");

        alter table
            "user"
        add
            constraint "user_email_unique" unique ("email");

        create table "profile" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "photo" varchar(255) not null default 'profile_pics/default.jpg',
            "user_id" int not null
        );

        alter table
            "profile"
        add
            constraint "profile_user_id_unique" unique ("user_id");

        create table "vehicle_model" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "make" varchar(50) not null,
            "model" varchar(50) not null
        );

        create table "service" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "name" varchar(50) not null,
            "price" int not null
        );

        create table "vehicle" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "plate" varchar(6) not null,
            "vin" varchar(17) not null,
            "owner_name" varchar(50) not null,
            "description" text null,
            "photo" varchar(255) null,
            "owner_id" int null,
            "vehicle_model_id" int null
        );

        create table "order" (
            "id" serial primary key,
            "date" timestamptz(0) not null default now(),
            "deadline" timestamptz(0) null,
            "status" varchar(1) not null default 't',
            "vehicle_id" int null,
            "client_id" int null
        );

        create table "order_line" (
            "id" serial primary key,
            "order_id" int not null,
            "service_id" int null,
            "quantity" int not null
        );

        create table "order_comment" (
            "id" serial primary key,
            "date_created" timestamptz(0) not null default now(),
            "content" varchar(5000) not null,
            "order_id" int not null,
            "author_id" int null
        );

        alter table
            "profile"
        add
            constraint "profile_user_id_foreign" foreign key ("user_id") references "user" ("id") on update cascade on delete cascade;

        alter table
            "vehicle"
        add
            constraint "vehicle_owner_id_foreign" foreign key ("owner_id") references "user" ("id") on update cascade on delete
        set
            null;

        alter table
            "vehicle"
        add
            constraint "vehicle_vehicle_model_id_foreign" foreign key ("vehicle_model_id") references "vehicle_model" ("id") on update cascade on delete
        set
            null;

        alter table
            "order"
        add
            constraint "order_vehicle_id_foreign" foreign key ("vehicle_id") references "vehicle" ("id") on update cascade on delete
        set
            null;

        alter table
            "order"
        add
            constraint "order_client_id_foreign" foreign key ("client_id") references "user" ("id") on update cascade on delete
        set
            null;

        alter table
            "order_line"
        add
            constraint "order_line_order_id_foreign" foreign key ("order_id") references "order" ("id") on update cascade on delete cascade;

        alter table
            "order_line"
        add
            constraint "order_line_service_id_foreign" foreign key ("service_id") references "service" ("id") on update cascade on delete
        set
            null;

        alter table
            "order_comment"
        add
            constraint "order_comment_order_id_foreign" foreign key ("order_id") references "order" ("id") on update cascade on delete cascade;

        alter table
            "order_comment"
        add
            constraint "order_comment_author_id_foreign" foreign key ("author_id") references "user" ("id") on update cascade on delete
        set
            null;
        "#;

        db.execute_unprepared(statement).await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Err(DbErr::Custom(String::from("cannot be reverted")))
    }
}
