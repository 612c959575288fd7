use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseBackend};

/// Second generation: user ownership for cards and ads, and geography.
///
/// Creates the `user` stand-in for the external auth system, adds nullable
/// owner columns to `card` and `ad` (existing rows keep NULL ownership),
/// introduces `city` with its region foreign key and the card junction,
/// and finally attaches `ad.city_id` with SET NULL delete semantics. The
/// city table must exist before the `ad` column that references it.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .col(
                        ColumnDef::new(User::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(User::Username)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        add_column_with_fk(
            manager,
            AddFk {
                table: "card",
                column: "user_id",
                references: "user",
                on_delete: ForeignKeyAction::Cascade,
                fk_name: "fk_card_user",
            },
        )
        .await?;

        add_column_with_fk(
            manager,
            AddFk {
                table: "ad",
                column: "user_id",
                references: "user",
                on_delete: ForeignKeyAction::Cascade,
                fk_name: "fk_ad_user",
            },
        )
        .await?;

        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .col(
                        ColumnDef::new(City::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(City::Name).string_len(120).not_null())
                    .col(ColumnDef::new(City::RegionId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_city_region")
                            .from(City::Table, City::RegionId)
                            .to(Region::Table, Region::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CardCity::Table)
                    .col(ColumnDef::new(CardCity::CardId).integer().not_null())
                    .col(ColumnDef::new(CardCity::CityId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(CardCity::CardId)
                            .col(CardCity::CityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CardCity::Table, CardCity::CardId)
                            .to(Card::Table, Card::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CardCity::Table, CardCity::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        add_column_with_fk(
            manager,
            AddFk {
                table: "ad",
                column: "city_id",
                references: "city",
                on_delete: ForeignKeyAction::SetNull,
                fk_name: "fk_ad_city",
            },
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Ad::Table)
                    .drop_column(Ad::CityId)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(CardCity::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(City::Table).to_owned())
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Ad::Table)
                    .drop_column(Ad::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Card::Table)
                    .drop_column(Card::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

/// A nullable integer column plus the foreign key that governs it.
struct AddFk {
    table: &'static str,
    column: &'static str,
    references: &'static str,
    on_delete: ForeignKeyAction,
    fk_name: &'static str,
}

/// Attach a nullable foreign-key column to an existing table.
///
/// SQLite cannot add a constraint to an existing table, but it accepts the
/// column-with-REFERENCES form of ADD COLUMN, so the two steps collapse
/// into one raw statement there. Everywhere else the column and the named
/// foreign key are added as separate schema operations.
async fn add_column_with_fk(manager: &SchemaManager<'_>, fk: AddFk) -> Result<(), DbErr> {
    match manager.get_database_backend() {
        DatabaseBackend::Sqlite => {
            let on_delete = match fk.on_delete {
                ForeignKeyAction::SetNull => "SET NULL",
                _ => "CASCADE",
            };
            let sql = format!(
                "ALTER TABLE \"{table}\" ADD COLUMN \"{column}\" integer \
                 REFERENCES \"{references}\" (\"id\") ON DELETE {on_delete}",
                table = fk.table,
                column = fk.column,
                references = fk.references,
                on_delete = on_delete,
            );
            manager.get_connection().execute_unprepared(&sql).await?;
        }
        _ => {
            manager
                .alter_table(
                    Table::alter()
                        .table(Alias::new(fk.table))
                        .add_column(ColumnDef::new(Alias::new(fk.column)).integer().null())
                        .to_owned(),
                )
                .await?;
            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name(fk.fk_name)
                        .from(Alias::new(fk.table), Alias::new(fk.column))
                        .to(Alias::new(fk.references), Alias::new("id"))
                        .on_delete(fk.on_delete)
                        .to_owned(),
                )
                .await?;
        }
    }

    Ok(())
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Username,
}

#[derive(DeriveIden)]
enum City {
    Table,
    Id,
    Name,
    RegionId,
}

#[derive(DeriveIden)]
enum CardCity {
    Table,
    CardId,
    CityId,
}

#[derive(DeriveIden)]
enum Card {
    Table,
    Id,
    UserId,
}

#[derive(DeriveIden)]
enum Ad {
    Table,
    UserId,
    CityId,
}

#[derive(DeriveIden)]
enum Region {
    Table,
    Id,
}
