use chrono::{Datelike, NaiveDate, Weekday};
use ui_headless::calendar::{self, DateBounds, DateRangeSelection};
use ui_headless::time::today;

use super::*;

const DEFAULT_VALUE_FORMAT: &str = "%Y-%m-%d";

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn format_range(selection: DateRangeSelection, format: &str) -> Option<String> {
    match selection {
        DateRangeSelection::Empty => None,
        DateRangeSelection::Start(start) => Some(format!("{} – …", start.format(format))),
        DateRangeSelection::Complete { start, end } => {
            Some(format!("{} – {}", start.format(format), end.format(format)))
        }
    }
}

#[component]
/// Month grid with previous/next navigation.
///
/// Selection is owned by the caller: `value` highlights a single day, `range` highlights endpoints
/// and the days between them (extended to `hovered` while the second end is pending).
pub fn Calendar(
    #[prop(optional, into)] value: MaybeSignal<Option<NaiveDate>>,
    #[prop(optional, into)] range: MaybeSignal<DateRangeSelection>,
    #[prop(optional, into)] hovered: MaybeSignal<Option<NaiveDate>>,
    #[prop(optional)] initial_month: Option<NaiveDate>,
    #[prop(default = Weekday::Mon)] first_day_of_week: Weekday,
    #[prop(optional)] bounds: DateBounds,
    #[prop(optional)] consistent_weeks: bool,
    #[prop(optional)] hide_outside_dates: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_select: Option<Callback<NaiveDate>>,
    #[prop(optional)] on_hover: Option<Callback<Option<NaiveDate>>>,
) -> impl IntoView {
    let opening = initial_month
        .or_else(|| value.get_untracked())
        .or_else(|| match range.get_untracked() {
            DateRangeSelection::Start(start) | DateRangeSelection::Complete { start, .. } => {
                Some(start)
            }
            DateRangeSelection::Empty => None,
        })
        .unwrap_or_else(today);
    let month = create_rw_signal(calendar::start_of_month(opening));
    let today = today();

    let can_go_back =
        move || bounds.month_has_selectable_day(calendar::shift_month(month.get(), -1));
    let can_go_forward =
        move || bounds.month_has_selectable_day(calendar::shift_month(month.get(), 1));

    let weekday_header = calendar::weekday_labels(first_day_of_week)
        .into_iter()
        .map(|label| view! { <th scope="col" data-ui-slot="weekday">{label}</th> })
        .collect_view();

    let day_cell = move |date: NaiveDate| {
        let outside = !calendar::is_same_month(date, month.get_untracked());
        let disabled = bounds.is_disabled(date);
        if outside && hide_outside_dates {
            return view! { <td data-ui-slot="day-placeholder"></td> }.into_view();
        }
        let selected = move || value.get() == Some(date) || range.get().is_endpoint(date);
        let in_range = move || range.get().is_in_range(date, hovered.get());
        view! {
            <td>
                <button
                    type="button"
                    data-ui-slot="day"
                    data-ui-outside=bool_token(outside)
                    data-ui-today=bool_token(date == today)
                    data-ui-weekend=bool_token(is_weekend(date))
                    data-ui-selected=move || bool_token(selected())
                    data-ui-in-range=move || bool_token(in_range())
                    aria-pressed=move || bool_token(selected())
                    aria-label=date.format("%A %-d %B %Y").to_string()
                    disabled=disabled
                    on:click=move |_| {
                        if disabled {
                            return;
                        }
                        if let Some(on_select) = on_select.as_ref() {
                            on_select.call(date);
                        }
                    }
                    on:mouseenter=move |_| {
                        if let Some(on_hover) = on_hover.as_ref() {
                            on_hover.call(Some(date));
                        }
                    }
                >
                    {date.day()}
                </button>
            </td>
        }
        .into_view()
    };

    let weeks = move || {
        calendar::month_days(month.get(), first_day_of_week, consistent_weeks)
            .into_iter()
            .map(|week| {
                let days = week.into_iter().map(day_cell).collect_view();
                view! { <tr>{days}</tr> }
            })
            .collect_view()
    };

    view! {
        <div
            class=merge_layout_class("ui-calendar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="calendar"
        >
            <div data-ui-slot="header">
                <IconButton
                    icon=IconName::ChevronLeft
                    size=ButtonSize::Sm
                    aria_label="Previous month"
                    ui_slot="previous"
                    disabled=Signal::derive(move || !can_go_back())
                    on_click=Callback::new(move |_| {
                        month.update(|month| *month = calendar::shift_month(*month, -1));
                    })
                />
                <span data-ui-slot="level" aria-live="polite">
                    {move || month.get().format("%B %Y").to_string()}
                </span>
                <IconButton
                    icon=IconName::ChevronRight
                    size=ButtonSize::Sm
                    aria_label="Next month"
                    ui_slot="next"
                    disabled=Signal::derive(move || !can_go_forward())
                    on_click=Callback::new(move |_| {
                        month.update(|month| *month = calendar::shift_month(*month, 1));
                    })
                />
            </div>
            <table
                data-ui-slot="month"
                on:mouseleave=move |_| {
                    if let Some(on_hover) = on_hover.as_ref() {
                        on_hover.call(None);
                    }
                }
            >
                <thead>
                    <tr>{weekday_header}</tr>
                </thead>
                <tbody>{weeks}</tbody>
            </table>
        </div>
    }
}

/// Closes an open picker dropdown on Escape.
fn close_on_escape(opened: RwSignal<bool>) {
    let listener = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
        if opened.get_untracked() && ev.key() == "Escape" {
            opened.set(false);
        }
    });
    on_cleanup(move || listener.remove());
}

#[component]
/// Input-like trigger that opens a [`Calendar`] dropdown for picking one date.
pub fn DatePicker(
    #[prop(into)] value: MaybeSignal<Option<NaiveDate>>,
    on_change: Callback<Option<NaiveDate>>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] value_format: Option<&'static str>,
    #[prop(optional)] clearable: bool,
    #[prop(default = Weekday::Mon)] first_day_of_week: Weekday,
    #[prop(optional)] bounds: DateBounds,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let opened = create_rw_signal(false);
    close_on_escape(opened);
    let value_format = value_format.unwrap_or(DEFAULT_VALUE_FORMAT);
    let placeholder = placeholder.unwrap_or_default();

    view! {
        <div
            class=merge_layout_class("ui-date-picker", layout_class)
            data-ui-primitive="true"
            data-ui-kind="date-picker"
            data-ui-state=move || if opened.get() { "open" } else { "closed" }
        >
            {label.map(|label| view! { <span data-ui-slot="label">{label}</span> })}
            <button
                type="button"
                class="ui-field"
                data-ui-slot="trigger"
                aria-haspopup="dialog"
                aria-expanded=move || bool_token(opened.get())
                on:click=move |_| opened.update(|opened| *opened = !*opened)
            >
                <Icon icon=IconName::Calendar size=IconSize::Sm />
                <span data-ui-slot="value">
                    {move || {
                        value
                            .get()
                            .map(|date| date.format(value_format).to_string())
                            .unwrap_or_else(|| placeholder.clone())
                    }}
                </span>
            </button>
            <Show when=move || clearable && value.get().is_some() fallback=|| ()>
                <IconButton
                    icon=IconName::Dismiss
                    size=ButtonSize::Sm
                    aria_label="Clear date"
                    ui_slot="clear"
                    on_click=Callback::new(move |_| on_change.call(None))
                />
            </Show>
            <Show when=move || opened.get() fallback=|| ()>
                <div data-ui-slot="dropdown" role="dialog">
                    <Calendar
                        value=value
                        first_day_of_week=first_day_of_week
                        bounds=bounds
                        on_select=Callback::new(move |date| {
                            on_change.call(Some(date));
                            opened.set(false);
                        })
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
/// Trigger plus [`Calendar`] dropdown for picking a date range in two clicks.
///
/// While only the first end is chosen, hovering previews the range. The dropdown closes once the
/// range is complete.
pub fn DateRangePicker(
    #[prop(into)] value: MaybeSignal<DateRangeSelection>,
    on_change: Callback<DateRangeSelection>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] value_format: Option<&'static str>,
    #[prop(optional)] allow_single_date: bool,
    #[prop(optional)] clearable: bool,
    #[prop(default = Weekday::Mon)] first_day_of_week: Weekday,
    #[prop(optional)] bounds: DateBounds,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let opened = create_rw_signal(false);
    let hovered = create_rw_signal::<Option<NaiveDate>>(None);
    close_on_escape(opened);
    let value_format = value_format.unwrap_or(DEFAULT_VALUE_FORMAT);
    let placeholder = placeholder.unwrap_or_default();

    view! {
        <div
            class=merge_layout_class("ui-date-picker", layout_class)
            data-ui-primitive="true"
            data-ui-kind="date-range-picker"
            data-ui-state=move || if opened.get() { "open" } else { "closed" }
        >
            {label.map(|label| view! { <span data-ui-slot="label">{label}</span> })}
            <button
                type="button"
                class="ui-field"
                data-ui-slot="trigger"
                aria-haspopup="dialog"
                aria-expanded=move || bool_token(opened.get())
                on:click=move |_| opened.update(|opened| *opened = !*opened)
            >
                <Icon icon=IconName::Calendar size=IconSize::Sm />
                <span data-ui-slot="value">
                    {move || format_range(value.get(), value_format).unwrap_or_else(|| placeholder.clone())}
                </span>
            </button>
            <Show when=move || clearable && value.get() != DateRangeSelection::Empty fallback=|| ()>
                <IconButton
                    icon=IconName::Dismiss
                    size=ButtonSize::Sm
                    aria_label="Clear range"
                    ui_slot="clear"
                    on_click=Callback::new(move |_| on_change.call(DateRangeSelection::Empty))
                />
            </Show>
            <Show when=move || opened.get() fallback=|| ()>
                <div data-ui-slot="dropdown" role="dialog">
                    <Calendar
                        range=value
                        hovered=hovered
                        first_day_of_week=first_day_of_week
                        bounds=bounds
                        on_hover=Callback::new(move |date| hovered.set(date))
                        on_select=Callback::new(move |date| {
                            let next = value.get_untracked().pick(date, allow_single_date);
                            on_change.call(next);
                            if next.bounds().is_some() {
                                hovered.set(None);
                                opened.set(false);
                            }
                        })
                    />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn range_label_tracks_selection_progress() {
        assert_eq!(format_range(DateRangeSelection::Empty, DEFAULT_VALUE_FORMAT), None);
        assert_eq!(
            format_range(DateRangeSelection::Start(date(2024, 5, 1)), DEFAULT_VALUE_FORMAT),
            Some("2024-05-01 – …".to_string())
        );
        assert_eq!(
            format_range(
                DateRangeSelection::Complete {
                    start: date(2024, 5, 1),
                    end: date(2024, 5, 9),
                },
                "%d/%m",
            ),
            Some("01/05 – 09/05".to_string())
        );
    }

    #[test]
    fn weekends_are_saturday_and_sunday() {
        assert!(is_weekend(date(2024, 5, 18)));
        assert!(is_weekend(date(2024, 5, 19)));
        assert!(!is_weekend(date(2024, 5, 20)));
    }
}
