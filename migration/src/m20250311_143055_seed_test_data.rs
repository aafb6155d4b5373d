use rand::{seq::SliceRandom, Rng};
use sea_orm_migration::{prelude::*, sea_orm::TransactionTrait};

use crate::seeder;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let transaction = db.begin().await?;

        let models = seeder::known_vehicle_models(&transaction).await?;
        let services = seeder::service_catalog(&transaction).await?;

        let mut users = vec![];

        for _ in 0..8 {
            let user = seeder::user(&transaction).await?;
            seeder::profile(&transaction, user.id).await?;
            users.push(user);
        }

        for _ in 0..15 {
            let model_id = models.choose(&mut rand::thread_rng()).map(|m| m.id);
            let owner_id = users.choose(&mut rand::thread_rng()).map(|u| u.id);

            let vehicle = seeder::vehicle(&transaction, model_id, owner_id).await?;

            let order_count = rand::thread_rng().gen_range(0..3);
            for _ in 0..order_count {
                let order = seeder::order(&transaction, Some(vehicle.id), owner_id).await?;

                let line_count = rand::thread_rng().gen_range(0..4);
                for _ in 0..line_count {
                    let service = services.choose(&mut rand::thread_rng());
                    if let Some(service) = service {
                        seeder::order_line(&transaction, order.id, service.id).await?;
                    }
                }

                let comment_count = rand::thread_rng().gen_range(0..3);
                for _ in 0..comment_count {
                    let author_id = users.choose(&mut rand::thread_rng()).map(|u| u.id);
                    seeder::order_comment(&transaction, order.id, author_id).await?;
                }
            }
        }

        transaction.commit().await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Err(DbErr::Custom(String::from("cannot be reverted")))
    }
}
