use dentbase_core::{
    app::App,
    migrate::{self, Migration, MigrationError, MigrationKey},
};
use dentbase_schema::{collection::Collection, field::Field};

pub(crate) fn migration() -> Migration {
    Migration {
        key: MigrationKey::new(1_752_829_474),
        name: "organizations",
        up,
        down: migrate::noop,
    }
}

fn up(app: &mut dyn App) -> Result<(), MigrationError> {
    let users = app.find_collection_by_name_or_id("users")?.id;

    let mut collection = Collection::base("organizations");
    collection
        .fields
        .add(Field::text("organization_name").required().max_len(100));
    collection
        .fields
        .add(Field::text("address").required().max_len(100));
    collection
        .fields
        .add(Field::relation("owners", users).required().max_select(20));

    app.save(collection)?;

    Ok(())
}
