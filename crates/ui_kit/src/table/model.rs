//! Row, cell, and column descriptors shared by every table stage.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

use leptos::View;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
/// A single field value as seen by the sort engine and the default cell renderer.
pub enum CellValue {
    /// Missing or null field.
    #[default]
    Null,
    /// Boolean field.
    Bool(bool),
    /// Numeric field.
    Number(f64),
    /// Textual field.
    Text(String),
}

impl CellValue {
    /// Returns `true` for [`CellValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 => {
                write!(f, "{}", *value as i64)
            }
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

macro_rules! numeric_cell {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CellValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

numeric_cell!(f32, i32, i64, u32, u64, usize);

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Bool(*value),
            Value::Number(value) => value.as_f64().map(Self::Number).unwrap_or(Self::Null),
            Value::String(value) => Self::Text(value.clone()),
            other => Self::Text(other.to_string()),
        }
    }
}

/// Field access used by the table to read rows it otherwise treats as opaque.
///
/// Fields that do not exist must resolve to [`CellValue::Null`].
pub trait TableRow {
    /// Resolves the named field of this row.
    fn field(&self, name: &str) -> CellValue;
}

impl TableRow for serde_json::Value {
    fn field(&self, name: &str) -> CellValue {
        self.get(name).map(CellValue::from).unwrap_or_default()
    }
}

impl TableRow for BTreeMap<String, CellValue> {
    fn field(&self, name: &str) -> CellValue {
        self.get(name).cloned().unwrap_or_default()
    }
}

impl TableRow for HashMap<String, CellValue> {
    fn field(&self, name: &str) -> CellValue {
        self.get(name).cloned().unwrap_or_default()
    }
}

/// Identity of a row inside the expansion set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RowKey {
    /// Position in the currently displayed collection. Only stable while row order is stable.
    Index(usize),
    /// Numeric identity supplied by the caller.
    Number(i64),
    /// Textual identity supplied by the caller.
    Text(String),
}

impl From<usize> for RowKey {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl From<i64> for RowKey {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RowKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RowKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(value) => write!(f, "row-{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Caller-supplied row identity function, applied to `(row, displayed_index)`.
pub type RowKeyFn<T> = Rc<dyn Fn(&T, usize) -> RowKey>;

/// Derived cell renderer.
pub type CellRenderer<T> = Rc<dyn Fn(&T) -> View>;

/// Resolves the key for a row, falling back to its displayed position.
pub fn row_key<T>(key_fn: Option<&RowKeyFn<T>>, row: &T, index: usize) -> RowKey {
    match key_fn {
        Some(key_fn) => key_fn(row, index),
        None => RowKey::Index(index),
    }
}

/// How a column produces its cell content.
pub enum ColumnValue<T> {
    /// Reads a named field and renders it as text.
    Field(String),
    /// Renders arbitrary content. Sorting, if any, reads `sort_field` from the row instead.
    Derived {
        /// Cell renderer.
        render: CellRenderer<T>,
        /// Field read when this column is sorted.
        sort_field: Option<String>,
    },
}

impl<T> Clone for ColumnValue<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(name) => Self::Field(name.clone()),
            Self::Derived { render, sort_field } => Self::Derived {
                render: Rc::clone(render),
                sort_field: sort_field.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Horizontal alignment of a column's header and cells.
pub enum ColumnAlign {
    /// Leading edge.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Trailing edge.
    End,
}

impl ColumnAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

/// Describes how one column is titled, rendered, and optionally sorted.
pub struct Column<T> {
    /// Header text.
    pub title: String,
    /// Cell content source.
    pub value: ColumnValue<T>,
    /// Optional CSS width.
    pub width: Option<String>,
    /// Whether clicking the header cycles the sort state.
    pub sortable: bool,
    /// Explicit sort key; overrides the field name of [`ColumnValue::Field`].
    pub sort_key: Option<String>,
    /// Cell alignment.
    pub align: ColumnAlign,
    /// Extra class applied to header and cells.
    pub class: Option<String>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            value: self.value.clone(),
            width: self.width.clone(),
            sortable: self.sortable,
            sort_key: self.sort_key.clone(),
            align: self.align,
            class: self.class.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match &self.value {
            ColumnValue::Field(name) => format!("Field({name})"),
            ColumnValue::Derived { sort_field, .. } => format!("Derived(sort_field={sort_field:?})"),
        };
        f.debug_struct("Column")
            .field("title", &self.title)
            .field("value", &value)
            .field("sortable", &self.sortable)
            .field("sort_key", &self.sort_key)
            .finish()
    }
}

impl<T> Column<T> {
    /// Column that renders the named field as text.
    pub fn field(title: impl Into<String>, field: impl Into<String>) -> Self {
        Self::with_value(title, ColumnValue::Field(field.into()))
    }

    /// Column that renders through a closure.
    pub fn derived(title: impl Into<String>, render: impl Fn(&T) -> View + 'static) -> Self {
        Self::with_value(
            title,
            ColumnValue::Derived {
                render: Rc::new(render),
                sort_field: None,
            },
        )
    }

    fn with_value(title: impl Into<String>, value: ColumnValue<T>) -> Self {
        Self {
            title: title.into(),
            value,
            width: None,
            sortable: false,
            sort_key: None,
            align: ColumnAlign::Start,
            class: None,
        }
    }

    /// Sets the CSS width.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Marks the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sets the sort key. For derived columns this is also the field read while sorting.
    pub fn sort_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if let ColumnValue::Derived { sort_field, .. } = &mut self.value {
            *sort_field = Some(key.clone());
        }
        self.sort_key = Some(key);
        self
    }

    /// Sets the alignment.
    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }

    /// Adds an extra class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Field name of a [`ColumnValue::Field`] column.
    pub fn field_name(&self) -> Option<&str> {
        match &self.value {
            ColumnValue::Field(name) => Some(name),
            ColumnValue::Derived { .. } => None,
        }
    }

    /// Key this column sorts by, if it can be sorted at all.
    pub fn effective_sort_key(&self) -> Option<&str> {
        if !self.sortable {
            return None;
        }
        self.sort_key.as_deref().or_else(|| match &self.value {
            ColumnValue::Field(name) => Some(name.as_str()),
            ColumnValue::Derived { sort_field, .. } => sort_field.as_deref(),
        })
    }
}

impl<T: TableRow> Column<T> {
    /// Renders this column's cell for `row`.
    pub fn render_cell(&self, row: &T) -> View {
        use leptos::IntoView;
        match &self.value {
            ColumnValue::Field(name) => row.field(name).to_string().into_view(),
            ColumnValue::Derived { render, .. } => render(row),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn json_rows_resolve_fields_and_missing_fields_are_null() {
        let row = json!({ "name": "Ada", "age": 36, "active": true, "tags": ["a"] });
        assert_eq!(row.field("name"), CellValue::Text("Ada".to_string()));
        assert_eq!(row.field("age"), CellValue::Number(36.0));
        assert_eq!(row.field("active"), CellValue::Bool(true));
        assert_eq!(row.field("tags"), CellValue::Text("[\"a\"]".to_string()));
        assert_eq!(row.field("missing"), CellValue::Null);
        assert_eq!(json!(3).field("anything"), CellValue::Null);
    }

    #[test]
    fn cell_display_drops_integral_fraction() {
        assert_eq!(CellValue::Number(40.0).to_string(), "40");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::from(Some("x")).to_string(), "x");
        assert_eq!(CellValue::from(None::<i64>), CellValue::Null);
    }

    #[test]
    fn effective_sort_key_prefers_explicit_key_and_requires_sortable() {
        let plain = Column::<serde_json::Value>::field("Name", "name");
        assert_eq!(plain.effective_sort_key(), None);

        let by_field = Column::<serde_json::Value>::field("Name", "name").sortable();
        assert_eq!(by_field.effective_sort_key(), Some("name"));

        let keyed = Column::<serde_json::Value>::field("Name", "name")
            .sortable()
            .sort_key("surname");
        assert_eq!(keyed.effective_sort_key(), Some("surname"));
    }

    #[test]
    fn derived_sort_key_also_becomes_sort_field() {
        let column = Column::<serde_json::Value>::derived("Total", |_| leptos::IntoView::into_view(()))
            .sortable()
            .sort_key("amount");
        match &column.value {
            ColumnValue::Derived { sort_field, .. } => {
                assert_eq!(sort_field.as_deref(), Some("amount"));
            }
            ColumnValue::Field(_) => panic!("expected derived column"),
        }
        assert_eq!(column.effective_sort_key(), Some("amount"));
    }

    #[test]
    fn default_row_key_is_displayed_index() {
        let row = json!({ "id": 7 });
        assert_eq!(row_key(None, &row, 3), RowKey::Index(3));

        let by_id: RowKeyFn<serde_json::Value> = Rc::new(|row, _| match row.field("id") {
            CellValue::Number(id) => RowKey::Number(id as i64),
            _ => RowKey::Text("unknown".into()),
        });
        assert_eq!(row_key(Some(&by_id), &row, 3), RowKey::Number(7));
    }
}
