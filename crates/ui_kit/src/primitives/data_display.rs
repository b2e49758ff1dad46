use super::*;

#[component]
/// Inline text with a role and tone.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Section heading rendered as `h1`..`h4` according to `level`.
pub fn Heading(
    #[prop(default = 2)] level: u8,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    let content = children();
    let heading = match level {
        0 | 1 => html::h1().child(content).into_any(),
        2 => html::h2().child(content).into_any(),
        3 => html::h3().child(content).into_any(),
        _ => html::h4().child(content).into_any(),
    };
    heading
        .attr("class", class)
        .attr("data-ui-primitive", "true")
        .attr("data-ui-kind", "heading")
        .attr("data-ui-level", level.clamp(1, 4).to_string())
        .attr("data-ui-tone", tone.token())
}

#[component]
/// Compact status badge.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Column definition for [`DataTable`].
pub struct DataTableColumn {
    /// Stable identifier written to `data-ui-column`.
    pub key: String,
    /// Header label.
    pub label: String,
    /// Right-aligns header and cells.
    pub numeric: bool,
}

impl DataTableColumn {
    /// Text column.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            numeric: false,
        }
    }

    /// Marks the column numeric.
    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    fn align_token(&self) -> &'static str {
        if self.numeric {
            "end"
        } else {
            "start"
        }
    }
}

#[component]
/// Table of string cells; rows shorter than the column list are padded with empty cells.
pub fn DataTable(
    columns: Vec<DataTableColumn>,
    #[prop(into)] rows: MaybeSignal<Vec<Vec<String>>>,
    #[prop(optional, into)] caption: Option<String>,
    #[prop(optional)] striped: bool,
    #[prop(optional, into)] empty_message: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let column_count = columns.len();
    let columns = store_value(columns);
    let empty_message = empty_message.unwrap_or_else(|| "No data".to_string());

    let header = columns.with_value(|columns| {
        columns
            .iter()
            .map(|column| {
                view! {
                    <th scope="col" data-ui-column=column.key.clone() data-ui-align=column.align_token()>
                        {column.label.clone()}
                    </th>
                }
            })
            .collect_view()
    });

    let body = move || {
        let rows = rows.get();
        if rows.is_empty() {
            return view! {
                <tr data-ui-slot="empty">
                    <td colspan=column_count.max(1)>{empty_message.clone()}</td>
                </tr>
            }
            .into_view();
        }
        rows.into_iter()
            .map(|row| {
                let cells = columns.with_value(|columns| {
                    columns
                        .iter()
                        .enumerate()
                        .map(|(index, column)| {
                            let cell = row.get(index).cloned().unwrap_or_default();
                            view! {
                                <td data-ui-column=column.key.clone() data-ui-align=column.align_token()>
                                    {cell}
                                </td>
                            }
                        })
                        .collect_view()
                });
                view! { <tr>{cells}</tr> }
            })
            .collect_view()
    };

    view! {
        <table
            class=merge_layout_class("ui-data-table", layout_class)
            data-ui-primitive="true"
            data-ui-kind="data-table"
            data-ui-striped=bool_token(striped)
        >
            {caption.map(|caption| view! { <caption>{caption}</caption> })}
            <thead>
                <tr>{header}</tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn numeric_columns_align_to_end() {
        let name = DataTableColumn::new("name", "Name");
        let size = DataTableColumn::new("size", "Size").numeric();
        assert_eq!(name.align_token(), "start");
        assert_eq!(size.align_token(), "end");
        assert_eq!(size.label, "Size");
    }
}
