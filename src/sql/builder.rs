//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for the curtains table.

pub const CURTAIN_TABLE: &str = "curtains";

/// Field-to-column mapping for `Curtain`, in bind order. The primary key is first.
pub const CURTAIN_COLUMNS: &[(&str, &str)] = &[
    ("id", "id INTEGER PRIMARY KEY"),
    ("name", "name VARCHAR(100) NOT NULL"),
    ("description", "description TEXT"),
    ("price", "price NUMERIC(10, 2) NOT NULL"),
    ("stock_quantity", "stock_quantity INTEGER NOT NULL DEFAULT 0"),
    ("material", "material VARCHAR(50)"),
    ("color", "color VARCHAR(30)"),
];

/// Quote identifier for PostgreSQL.
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub fn qualified_table(schema: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(CURTAIN_TABLE))
}

fn column_names() -> impl Iterator<Item = &'static str> {
    CURTAIN_COLUMNS.iter().map(|(name, _)| *name)
}

fn select_column_list() -> String {
    column_names().map(quoted).collect::<Vec<_>>().join(", ")
}

/// CREATE TABLE IF NOT EXISTS with the widths the record declares.
pub fn create_table(schema: &str) -> String {
    let defs: Vec<String> = CURTAIN_COLUMNS
        .iter()
        .map(|(name, def)| {
            let ty = def.strip_prefix(name).unwrap_or(def);
            format!("{}{}", quoted(name), ty)
        })
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        qualified_table(schema),
        defs.join(", ")
    )
}

/// SELECT every row ordered by primary key.
pub fn select_all(schema: &str) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(),
        qualified_table(schema),
        quoted("id")
    )
}

/// SELECT by primary key. Caller binds id as $1.
pub fn select_by_id(schema: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        select_column_list(),
        qualified_table(schema),
        quoted("id")
    )
}

/// SELECT EXISTS by primary key. Caller binds id as $1.
pub fn exists_by_id(schema: &str) -> String {
    format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = $1)",
        qualified_table(schema),
        quoted("id")
    )
}

/// INSERT all columns in mapping order, RETURNING the stored row.
pub fn insert(schema: &str) -> String {
    let placeholders: Vec<String> = (1..=CURTAIN_COLUMNS.len()).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        qualified_table(schema),
        select_column_list(),
        placeholders.join(", "),
        select_column_list()
    )
}

/// UPDATE every non-key column; id is $1, the rest follow mapping order.
pub fn update(schema: &str) -> String {
    let sets: Vec<String> = column_names()
        .enumerate()
        .skip(1)
        .map(|(i, col)| format!("{} = ${}", quoted(col), i + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = $1",
        qualified_table(schema),
        sets.join(", "),
        quoted("id")
    )
}

/// DELETE by primary key. Caller binds id as $1.
pub fn delete(schema: &str) -> String {
    format!(
        "DELETE FROM {} WHERE {} = $1",
        qualified_table(schema),
        quoted("id")
    )
}
