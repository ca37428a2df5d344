use dentbase_core::{
    app::App,
    migrate::{self, Migration, MigrationError, MigrationKey},
};
use dentbase_schema::{collection::Collection, field::Field};

pub(crate) fn migration() -> Migration {
    Migration {
        key: MigrationKey::new(1_752_955_000),
        name: "dental_charts",
        up,
        down: migrate::noop,
    }
}

fn up(app: &mut dyn App) -> Result<(), MigrationError> {
    let patients = app.find_collection_by_name_or_id("patients")?.id;
    let staff_members = app.find_collection_by_name_or_id("staff_members")?.id;
    let clinics = app.find_collection_by_name_or_id("clinics")?.id;

    // Charts predate the scheduling module in some deployments; the
    // appointment link is attached only when that collection exists.
    let appointments = app.find_collection("appointments").map(|c| c.id);

    let mut collection = Collection::base("dental_charts");
    collection
        .fields
        .add(Field::relation("patient", patients).required());
    collection
        .fields
        .add(Field::relation("doctor", staff_members));
    collection
        .fields
        .add(Field::relation("clinic", clinics).required());

    if let Some(appointments) = appointments {
        collection
            .fields
            .add(Field::relation("appointment", appointments));
    }

    collection.fields.add(
        Field::select("chart_type", [
            "initial",
            "progress",
            "recall",
            "pre_op",
            "post_op",
        ])
        .required(),
    );
    collection.fields.add(
        Field::select("notation_system", ["universal", "fdi", "palmer"]).required(),
    );
    collection.fields.add(
        Field::select("dentition", ["permanent", "primary", "mixed"]).required(),
    );
    collection.fields.add(Field::json("chart_state").required());
    collection.fields.add(Field::text("notes").max_len(2000));
    collection.fields.add(
        Field::file("images")
            .max_select(10)
            .max_size(10 * 1024 * 1024)
            .mime_types(["image/png", "image/jpeg", "image/webp"])
            .thumbs(["100x100", "800x800"]),
    );

    app.save(collection)?;

    Ok(())
}
