//! Table state: selection scope, sort cycling, column visibility,
//! and preference persistence.

use opsboard_ui::prefs::PrefsStore;
use opsboard_ui::{Column, Direction, Table, TableRow};

#[derive(Clone)]
struct TestRow {
    id: u32,
    name: &'static str,
    region: &'static str,
}

impl TestRow {
    fn new(id: u32, name: &'static str, region: &'static str) -> Self {
        Self { id, name, region }
    }
}

impl TableRow for TestRow {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn cell(&self, column: &str) -> String {
        match column {
            "name" => self.name.to_string(),
            "region" => self.region.to_string(),
            _ => String::new(),
        }
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable().locked(),
        Column::new("region", "Region"),
        Column::new("updated_at", "Updated").hidden(),
    ]
}

fn page_one() -> Vec<TestRow> {
    vec![
        TestRow::new(1, "North depot", "North"),
        TestRow::new(2, "South depot", "South"),
        TestRow::new(3, "East depot", "East"),
    ]
}

#[test]
fn select_all_is_scoped_to_loaded_rows() {
    let table: Table<TestRow> = Table::new("sites", columns());
    table.set_rows(page_one());

    let added = table.select_all();
    assert_eq!(added.len(), 3);

    // Page change: only ids still loaded stay selected.
    table.set_rows(vec![
        TestRow::new(3, "East depot", "East"),
        TestRow::new(4, "West depot", "West"),
    ]);

    assert_eq!(table.selected_ids(), ["3".to_string()]);
}

#[test]
fn toggling_an_unloaded_id_is_a_noop() {
    let table: Table<TestRow> = Table::new("sites", columns());
    table.set_rows(page_one());

    assert!(!table.toggle_select("99"));
    assert!(table.selected_ids().is_empty());

    assert!(table.toggle_select("2"));
    assert!(table.is_selected("2"));
    assert!(!table.toggle_select("2"));
    assert!(table.selected_ids().is_empty());
}

#[test]
fn sort_indicator_cycles_three_states() {
    let table: Table<TestRow> = Table::new("sites", columns());

    assert_eq!(
        table.toggle_sort("name"),
        Some(("name".to_string(), Direction::Asc))
    );
    assert_eq!(
        table.toggle_sort("name"),
        Some(("name".to_string(), Direction::Desc))
    );
    assert_eq!(table.toggle_sort("name"), None);

    // A non-sortable column never sorts.
    assert_eq!(table.toggle_sort("region"), None);

    // Switching columns restarts at ascending.
    table.toggle_sort("name");
    table.toggle_sort("name");
    assert_eq!(table.sort(), Some(("name".to_string(), Direction::Desc)));
}

#[test]
fn visibility_honors_hideable_and_defaults() {
    let table: Table<TestRow> = Table::new("sites", columns());

    // Declared hidden column starts out invisible.
    let keys: Vec<String> = table
        .visible_columns()
        .into_iter()
        .map(|c| c.key)
        .collect();
    assert_eq!(keys, ["name".to_string(), "region".to_string()]);

    // Locked columns cannot be hidden; unknown keys are ignored.
    table.set_column_visible("name", false);
    table.set_column_visible("nope", false);
    assert!(table.is_column_visible("name"));

    table.set_column_visible("region", false);
    assert!(!table.is_column_visible("region"));
    table.set_column_visible("updated_at", true);

    let keys: Vec<String> = table
        .visible_columns()
        .into_iter()
        .map(|c| c.key)
        .collect();
    assert_eq!(keys, ["name".to_string(), "updated_at".to_string()]);
}

#[test]
fn view_renders_visible_cells_in_order() {
    let table: Table<TestRow> = Table::new("sites", columns());
    table.set_rows(page_one());
    table.toggle_select("1");

    let view = table.view();
    assert_eq!(view.headers.len(), 2);
    assert_eq!(view.headers[0].label, "Name");
    assert_eq!(view.rows.len(), 3);
    assert!(view.rows[0].selected);
    assert_eq!(view.rows[0].cells, ["North depot", "North"]);
    assert!(view.empty_message.is_none());
}

#[test]
fn empty_message_appears_only_when_idle() {
    let table: Table<TestRow> =
        Table::new("sites", columns()).with_empty_message("No sites found");

    assert_eq!(table.view().empty_message.as_deref(), Some("No sites found"));

    // While loading the empty message makes way for the spinner.
    table.set_loading(true);
    assert!(table.view().empty_message.is_none());

    // Previously rendered rows stay up during a refresh.
    table.set_loading(false);
    table.set_rows(page_one());
    table.set_loading(true);
    assert_eq!(table.view().rows.len(), 3);
}

#[test]
fn pinned_columns_snap_back_to_declared_position() {
    let table: Table<TestRow> = Table::new(
        "sites",
        vec![
            Column::new("name", "Name").pinned(),
            Column::new("region", "Region"),
            Column::new("updated_at", "Updated"),
        ],
    );

    table.set_column_order(vec![
        "updated_at".to_string(),
        "region".to_string(),
        "name".to_string(),
    ]);

    let keys: Vec<String> = table
        .visible_columns()
        .into_iter()
        .map(|c| c.key)
        .collect();
    assert_eq!(
        keys,
        [
            "name".to_string(),
            "updated_at".to_string(),
            "region".to_string()
        ]
    );
}

#[tokio::test]
async fn column_prefs_round_trip_per_storage_key() {
    let store = PrefsStore::in_memory();

    let table: Table<TestRow> = Table::new("sites", columns());
    table.set_column_visible("region", false);
    table.set_column_order(vec!["region".to_string(), "name".to_string()]);
    table.save_prefs(&store).await.unwrap();

    // Same storage key: preferences apply.
    let restored: Table<TestRow> = Table::new("sites", columns());
    restored.load_prefs(&store).await.unwrap();
    assert!(!restored.is_column_visible("region"));
    let keys: Vec<String> = restored.columns().into_iter().map(|c| c.key).collect();
    assert_eq!(keys.len(), 3);
    let visible: Vec<String> = restored
        .visible_columns()
        .into_iter()
        .map(|c| c.key)
        .collect();
    assert_eq!(visible, ["name".to_string()]);

    // Different storage key: untouched.
    let other: Table<TestRow> = Table::new("vendors", columns());
    other.load_prefs(&store).await.unwrap();
    assert!(other.is_column_visible("region"));
}

#[test]
fn prefs_ignore_unknown_and_locked_columns() {
    use opsboard_ui::components::table::ColumnPrefs;

    // Simulate a stale pref referencing removed/locked columns.
    let table: Table<TestRow> = Table::new("sites", columns());
    table.apply_prefs(ColumnPrefs {
        hidden: vec!["name".to_string(), "ghost".to_string()],
        order: vec!["ghost".to_string(), "region".to_string()],
    });

    assert!(table.is_column_visible("name"));
    let visible: Vec<String> = table
        .visible_columns()
        .into_iter()
        .map(|c| c.key)
        .collect();
    // Order keeps known keys and re-appends the rest in declared order.
    assert_eq!(
        visible,
        [
            "region".to_string(),
            "name".to_string(),
            "updated_at".to_string()
        ]
    );
}
