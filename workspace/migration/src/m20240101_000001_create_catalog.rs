use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// A many-to-many table keyed by the pair of parent ids. Deleting either
/// parent deletes the row.
struct Junction {
    table: &'static str,
    /// (column, parent table)
    left: (&'static str, &'static str),
    right: (&'static str, &'static str),
}

const JUNCTIONS: [Junction; 5] = [
    Junction {
        table: "people_favorite",
        left: ("user_id", "user"),
        right: ("people_id", "people"),
    },
    Junction {
        table: "favorite_film",
        left: ("user_id", "user"),
        right: ("film_id", "film"),
    },
    Junction {
        table: "peoplefilm",
        left: ("film_id", "film"),
        right: ("people_id", "people"),
    },
    Junction {
        table: "filmplanet",
        left: ("film_id", "film"),
        right: ("planet_id", "planet"),
    },
    Junction {
        table: "filmvehicle",
        left: ("film_id", "film"),
        right: ("vehicle_id", "vehicle"),
    },
];

impl Junction {
    fn create_statement(&self) -> TableCreateStatement {
        let (left_column, left_parent) = self.left;
        let (right_column, right_parent) = self.right;

        Table::create()
            .table(Alias::new(self.table))
            .if_not_exists()
            .col(integer(Alias::new(left_column)))
            .col(integer(Alias::new(right_column)))
            .primary_key(
                Index::create()
                    .name(format!("pk_{}", self.table))
                    .col(Alias::new(left_column))
                    .col(Alias::new(right_column)),
            )
            .foreign_key(&mut self.parent_key(left_column, left_parent))
            .foreign_key(&mut self.parent_key(right_column, right_parent))
            .to_owned()
    }

    fn parent_key(&self, column: &'static str, parent: &'static str) -> ForeignKeyCreateStatement {
        ForeignKey::create()
            .name(format!("fk_{}_{}", self.table, parent))
            .from(Alias::new(self.table), Alias::new(column))
            .to(Alias::new(parent), Alias::new("id"))
            .on_delete(ForeignKeyAction::Cascade)
            .on_update(ForeignKeyAction::Cascade)
            .to_owned()
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len(User::Username, 50).unique_key())
                    .col(string_len(User::Firstname, 50))
                    .col(string_len(User::Lastname, 50))
                    .col(string_len(User::Email, 120).unique_key())
                    .col(string_len(User::Password, 255))
                    .col(boolean(User::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(pk_auto(People::Id))
                    .col(string_len(People::Firstname, 50))
                    .col(string_len(People::Lastname, 50))
                    .col(string_len(People::Specie, 50))
                    .col(string_len(People::Created, 100))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Film::Table)
                    .if_not_exists()
                    .col(pk_auto(Film::Id))
                    .col(string_len(Film::Name, 50))
                    .col(string_len(Film::Director, 100))
                    .col(string_len(Film::Created, 100))
                    .col(date(Film::Edited))
                    .col(date(Film::ReleaseDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len(Planet::Name, 50))
                    .col(string_len(Planet::Diameter, 50))
                    .col(string_len(Planet::Climate, 50))
                    .col(string_len(Planet::Terrain, 50))
                    .col(string_len(Planet::SurfaceWater, 50))
                    .col(string_len(Planet::Created, 100))
                    .col(date(Planet::Edited))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_len(Vehicle::Name, 50))
                    .col(string_len(Vehicle::Model, 50))
                    .col(string_len(Vehicle::VehiclesClass, 50))
                    .col(string_len(Vehicle::Created, 100))
                    .col(date(Vehicle::Edited))
                    .to_owned(),
            )
            .await?;

        for junction in &JUNCTIONS {
            manager.create_table(junction.create_statement()).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Junctions first, they reference every other table
        for junction in JUNCTIONS.iter().rev() {
            manager
                .drop_table(Table::drop().table(Alias::new(junction.table)).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Film::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Username,
    Firstname,
    Lastname,
    Email,
    Password,
    IsActive,
}

#[derive(DeriveIden)]
enum People {
    Table,
    Id,
    Firstname,
    Lastname,
    Specie,
    Created,
}

#[derive(DeriveIden)]
enum Film {
    Table,
    Id,
    Name,
    Director,
    Created,
    Edited,
    ReleaseDate,
}

#[derive(DeriveIden)]
enum Planet {
    Table,
    Id,
    Name,
    Diameter,
    Climate,
    Terrain,
    SurfaceWater,
    Created,
    Edited,
}

#[derive(DeriveIden)]
enum Vehicle {
    Table,
    Id,
    Name,
    Model,
    VehiclesClass,
    Created,
    Edited,
}
