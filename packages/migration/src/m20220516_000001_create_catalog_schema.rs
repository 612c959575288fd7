use sea_orm_migration::prelude::*;

/// First generation of the catalog schema: price cards, classified ads,
/// regions, categories, filters and parameters, plus the junction tables
/// between them. No user ownership and no cities yet.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Check constraints live inside the CREATE TABLE statements so a
        // table can never exist without its length rules.
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .col(
                        ColumnDef::new(Card::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Card::Name)
                            .string_len(120)
                            .not_null()
                            .check(Expr::expr(Func::char_length(Expr::col(Card::Name))).gte(5)),
                    )
                    .col(ColumnDef::new(Card::Description).text().null())
                    .col(ColumnDef::new(Card::Price).double().not_null())
                    .col(ColumnDef::new(Card::Image).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Ad::Table)
                    .col(
                        ColumnDef::new(Ad::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Ad::Name)
                            .string_len(70)
                            .not_null()
                            .check(Expr::expr(Func::char_length(Expr::col(Ad::Name))).gte(10)),
                    )
                    .col(
                        ColumnDef::new(Ad::Description)
                            .text()
                            .not_null()
                            .check(
                                Expr::expr(Func::char_length(Expr::col(Ad::Description))).gte(30),
                            ),
                    )
                    .col(ColumnDef::new(Ad::Phone).string_len(120).not_null())
                    .col(ColumnDef::new(Ad::Image).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Region::Table)
                    .col(
                        ColumnDef::new(Region::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Region::Name).string_len(250).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .col(
                        ColumnDef::new(Category::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Category::Name).string_len(120).not_null())
                    .col(ColumnDef::new(Category::Tag).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Filter::Table)
                    .col(
                        ColumnDef::new(Filter::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Filter::Name).string_len(120).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Parameter::Table)
                    .col(
                        ColumnDef::new(Parameter::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Parameter::Name).string_len(120).not_null())
                    .col(ColumnDef::new(Parameter::FilterId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parameter_filter")
                            .from(Parameter::Table, Parameter::FilterId)
                            .to(Filter::Table, Filter::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(junction(
                CategoryCard::Table,
                (CategoryCard::CategoryId, Category::Table, Category::Id),
                (CategoryCard::CardId, Card::Table, Card::Id),
            ))
            .await?;

        manager
            .create_table(junction(
                CategoryAd::Table,
                (CategoryAd::CategoryId, Category::Table, Category::Id),
                (CategoryAd::AdId, Ad::Table, Ad::Id),
            ))
            .await?;

        manager
            .create_table(junction(
                FilterCard::Table,
                (FilterCard::FilterId, Filter::Table, Filter::Id),
                (FilterCard::CardId, Card::Table, Card::Id),
            ))
            .await?;

        // filter_category links cards despite its name; kept as-is for
        // compatibility with existing data.
        manager
            .create_table(junction(
                FilterCategory::Table,
                (FilterCategory::FilterId, Filter::Table, Filter::Id),
                (FilterCategory::CardId, Card::Table, Card::Id),
            ))
            .await?;

        manager
            .create_table(junction(
                ParameterCard::Table,
                (ParameterCard::ParameterId, Parameter::Table, Parameter::Id),
                (ParameterCard::CardId, Card::Table, Card::Id),
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reverse dependency order: junctions before the tables they join.
        let tables: Vec<TableRef> = vec![
            ParameterCard::Table.into_table_ref(),
            FilterCategory::Table.into_table_ref(),
            FilterCard::Table.into_table_ref(),
            CategoryAd::Table.into_table_ref(),
            CategoryCard::Table.into_table_ref(),
            Parameter::Table.into_table_ref(),
            Filter::Table.into_table_ref(),
            Category::Table.into_table_ref(),
            Region::Table.into_table_ref(),
            Ad::Table.into_table_ref(),
            Card::Table.into_table_ref(),
        ];
        for table in tables {
            manager
                .drop_table(Table::drop().table(table).to_owned())
                .await?;
        }

        Ok(())
    }
}

/// Junction table over two cascading foreign keys with a composite
/// primary key, so association rows never outlive either side.
fn junction<J, LC, LT, RC, RT>(
    table: J,
    left: (LC, LT, LT),
    right: (RC, RT, RT),
) -> TableCreateStatement
where
    J: Iden + Copy + 'static,
    LC: Iden + Copy + 'static,
    LT: Iden + Copy + 'static,
    RC: Iden + Copy + 'static,
    RT: Iden + Copy + 'static,
{
    let (left_col, left_table, left_ref) = left;
    let (right_col, right_table, right_ref) = right;

    Table::create()
        .table(table)
        .col(ColumnDef::new(left_col).integer().not_null())
        .col(ColumnDef::new(right_col).integer().not_null())
        .primary_key(Index::create().col(left_col).col(right_col))
        .foreign_key(
            ForeignKey::create()
                .from(table, left_col)
                .to(left_table, left_ref)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(table, right_col)
                .to(right_table, right_ref)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden, Clone, Copy)]
enum Card {
    Table,
    Id,
    Name,
    Description,
    Price,
    Image,
}

#[derive(DeriveIden, Clone, Copy)]
enum Ad {
    Table,
    Id,
    Name,
    Description,
    Phone,
    Image,
}

#[derive(DeriveIden, Clone, Copy)]
enum Region {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden, Clone, Copy)]
enum Category {
    Table,
    Id,
    Name,
    Tag,
}

#[derive(DeriveIden, Clone, Copy)]
enum Filter {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden, Clone, Copy)]
enum Parameter {
    Table,
    Id,
    Name,
    FilterId,
}

#[derive(DeriveIden, Clone, Copy)]
enum CategoryCard {
    Table,
    CategoryId,
    CardId,
}

#[derive(DeriveIden, Clone, Copy)]
enum CategoryAd {
    Table,
    CategoryId,
    AdId,
}

#[derive(DeriveIden, Clone, Copy)]
enum FilterCard {
    Table,
    FilterId,
    CardId,
}

#[derive(DeriveIden, Clone, Copy)]
enum FilterCategory {
    Table,
    FilterId,
    CardId,
}

#[derive(DeriveIden, Clone, Copy)]
enum ParameterCard {
    Table,
    ParameterId,
    CardId,
}
