use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clan::Table)
                    .if_not_exists()
                    // gen_random_uuid() is built in from PostgreSQL 13
                    .col(pk_uuid(Clan::Id).default(Expr::cust("gen_random_uuid()")))
                    .col(string_len(Clan::Name, 255))
                    .col(string_len(Clan::Region, 4))
                    .col(
                        timestamp_with_time_zone(Clan::CreatedAt)
                            .default(Expr::cust("timezone('utc', now())")),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Clan {
    #[sea_orm(iden = "clans")]
    Table,
    Id,
    Name,
    Region,
    CreatedAt,
}
