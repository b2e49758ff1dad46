use std::time::Duration;

use chrono::NaiveDate;
use leptos::*;
use leptos_meta::*;
use ui_headless::calendar::DateRangeSelection;
use ui_headless::notifications::{self as notify, NotificationHandlers};
use ui_headless::{NotifyError, PaginationState};
use ui_kit::prelude::*;

const NOTIFICATIONS_CONFIG: &str =
    r#"{"position":"top-right","limit":3,"auto_close":5000,"transition_duration_ms":200}"#;
const ROWS_PER_PAGE: usize = 5;

fn showcase_config() -> NotificationsConfig {
    NotificationsConfig::from_json(NOTIFICATIONS_CONFIG).unwrap_or_else(|err| {
        logging::warn!("showcase notifications config rejected: {err}");
        NotificationsConfig::default()
    })
}

fn report(result: Result<impl Sized, NotifyError>) {
    if let Err(err) = result {
        logging::warn!("showcase notification failed: {err}");
    }
}

fn inventory_rows() -> Vec<Vec<String>> {
    const NAMES: [&str; 6] = ["Bolt", "Nut", "Washer", "Bracket", "Hinge", "Spring"];
    (0..23)
        .map(|index| {
            vec![
                format!("SKU-{:04}", 1000 + index * 7),
                NAMES[index % NAMES.len()].to_string(),
                ((index * 37) % 90 + 10).to_string(),
            ]
        })
        .collect()
}

fn email_error(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some("Email is required".to_string())
    } else if !trimmed.contains('@') || trimmed.starts_with('@') || trimmed.ends_with('@') {
        Some("Enter a valid email address".to_string())
    } else {
        None
    }
}

#[component]
/// Root showcase view.
pub fn ShowcaseApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="ui_kit showcase" />
        <Meta name="description" content="Interactive demo of the ui_kit component primitives." />

        <NotificationsProvider config=showcase_config()>
            <main class="showcase-root">
                <Stack gap=LayoutGap::Lg>
                    <Heading level=1>"ui_kit"</Heading>
                    <NotificationsDemo />
                    <SliderDemo />
                    <TableDemo />
                    <DatesDemo />
                    <ModalDemo />
                </Stack>
            </main>
        </NotificationsProvider>
    }
}

#[component]
fn NotificationsDemo() -> impl IntoView {
    let notifications = use_notifications();
    let limit = create_rw_signal(3.0_f64);

    let show_loading = move |_| {
        let Ok(id) = notify::loading("Uploading report") else {
            return;
        };
        set_timeout(
            move || {
                report(notify::update(
                    &id,
                    NotificationPatch {
                        message: Some("Report uploaded".to_string()),
                        kind: Some(NotificationKind::Success),
                        loading: Some(false),
                        auto_close: Some(AutoClose::After(3000)),
                        with_close_button: Some(true),
                        ..NotificationPatch::default()
                    },
                ));
            },
            Duration::from_secs(2),
        );
    };

    let position_buttons = NotificationPosition::ALL
        .into_iter()
        .map(|position| {
            view! {
                <Button
                    size=ButtonSize::Sm
                    variant=ButtonVariant::Quiet
                    selected=Signal::derive(move || {
                        notifications.state.with(|state| state.position == position)
                    })
                    on_click=Callback::new(move |_| notifications.set_position(position))
                >
                    {position.token()}
                </Button>
            }
        })
        .collect_view();

    view! {
        <section class="showcase-section">
            <Heading level=2>"Notifications"</Heading>
            <Cluster>
                <Button on_click=Callback::new(|_| report(notify::show(NotificationData::new("Plain message"))))>
                    "Default"
                </Button>
                <Button
                    variant=ButtonVariant::Primary
                    on_click=Callback::new(|_| report(notify::success("Changes saved")))
                >
                    "Success"
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    on_click=Callback::new(|_| report(notify::error("Could not reach the server")))
                >
                    "Error"
                </Button>
                <Button on_click=Callback::new(|_| report(notify::warning("Disk almost full")))>
                    "Warning"
                </Button>
                <Button on_click=Callback::new(|_| report(notify::info("New version available")))>
                    "Info"
                </Button>
                <Button on_click=Callback::new(show_loading)>"Loading"</Button>
                <Button
                    on_click=Callback::new(|_| {
                        report(notify::show(
                            NotificationData::new("Stays until dismissed")
                                .with_title("Sticky")
                                .with_color("violet")
                                .with_border(true)
                                .with_auto_close(AutoClose::Never),
                        ))
                    })
                >
                    "Sticky"
                </Button>
            </Cluster>
            <Cluster>
                <Button
                    variant=ButtonVariant::Quiet
                    on_click=Callback::new(move |_| notifications.clean_queue())
                >
                    "Clean queue"
                </Button>
                <Button
                    variant=ButtonVariant::Quiet
                    on_click=Callback::new(move |_| notifications.clean())
                >
                    "Clean all"
                </Button>
                <Badge tone=TextTone::Secondary>
                    {move || {
                        notifications
                            .state
                            .with(|state| format!("{} queued", state.queue.len()))
                    }}
                </Badge>
            </Cluster>
            <Cluster gap=LayoutGap::Sm>{position_buttons}</Cluster>
            <Text role=TextRole::Label>"Visible limit"</Text>
            <Slider
                value=limit
                min=1.0
                max=6.0
                step=1.0
                aria_label="Visible limit"
                marks=(1..=6).map(|mark| SliderMark::labelled(f64::from(mark), mark.to_string())).collect()
                on_change=Callback::new(move |value: f64| limit.set(value))
                on_change_end=Callback::new(move |value: f64| {
                    report(notify::set_limit(value.round().max(1.0) as usize))
                })
            />
        </section>
    }
}

#[component]
fn SliderDemo() -> impl IntoView {
    let volume = create_rw_signal(40.0_f64);
    let price = create_rw_signal(RangeValue::new(20.0, 60.0));

    view! {
        <section class="showcase-section">
            <Heading level=2>"Sliders"</Heading>
            <Text>{move || format!("Volume {}", volume.get())}</Text>
            <Slider
                value=volume
                step=5.0
                aria_label="Volume"
                marks=vec![SliderMark::labelled(25.0, "25%"), SliderMark::labelled(50.0, "50%"), SliderMark::labelled(75.0, "75%")]
                on_change=Callback::new(move |value| volume.set(value))
            />
            <Text>{move || {
                let range = price.get();
                format!("Price {} to {}", range.start, range.end)
            }}</Text>
            <RangeSlider
                value=price
                step=1.0
                min_range=10.0
                aria_label="Price range"
                on_change=Callback::new(move |value| price.set(value))
            />
        </section>
    }
}

#[component]
fn TableDemo() -> impl IntoView {
    let rows = store_value(inventory_rows());
    let total_pages = rows.with_value(|rows| PaginationState::for_items(rows.len(), ROWS_PER_PAGE).total);
    let page = create_rw_signal(1_u32);

    let visible_rows = Signal::derive(move || {
        let mut state = PaginationState::new(total_pages);
        state.set_page(page.get());
        rows.with_value(|rows| {
            let (start, end) = state.slice_bounds(rows.len(), ROWS_PER_PAGE);
            rows[start..end].to_vec()
        })
    });

    view! {
        <section class="showcase-section">
            <Heading level=2>"Table and pagination"</Heading>
            <DataTable
                caption="Inventory"
                striped=true
                columns=vec![
                    DataTableColumn::new("sku", "SKU"),
                    DataTableColumn::new("name", "Name"),
                    DataTableColumn::new("stock", "Stock").numeric(),
                ]
                rows=visible_rows
            />
            <Pagination
                total=total_pages
                value=page
                with_edges=true
                on_change=Callback::new(move |next| page.set(next))
            />
        </section>
    }
}

#[component]
fn DatesDemo() -> impl IntoView {
    let date = create_rw_signal::<Option<NaiveDate>>(None);
    let range = create_rw_signal(DateRangeSelection::Empty);

    view! {
        <section class="showcase-section">
            <Heading level=2>"Dates"</Heading>
            <Cluster align=LayoutAlign::Start>
                <DatePicker
                    label="Due date"
                    placeholder="Pick a date"
                    clearable=true
                    value=date
                    on_change=Callback::new(move |next| date.set(next))
                />
                <DateRangePicker
                    label="Stay"
                    placeholder="Pick dates"
                    clearable=true
                    allow_single_date=true
                    value=range
                    on_change=Callback::new(move |next| range.set(next))
                />
            </Cluster>
            <Calendar
                value=date
                consistent_weeks=true
                on_select=Callback::new(move |next| date.set(Some(next)))
            />
        </section>
    }
}

#[component]
fn ModalDemo() -> impl IntoView {
    let opened = create_rw_signal(false);
    let email = create_rw_signal(String::new());
    let touched = create_rw_signal(false);
    let error = Signal::derive(move || {
        if touched.get() {
            email.with(|email| email_error(email))
        } else {
            None
        }
    });

    let submit = move |_| {
        touched.set(true);
        if email.with_untracked(|email| email_error(email)).is_some() {
            return;
        }
        opened.set(false);
        report(notify::success(format!("Invite sent to {}", email.get_untracked())));
        email.set(String::new());
        touched.set(false);
    };

    view! {
        <section class="showcase-section">
            <Heading level=2>"Modal and fields"</Heading>
            <Button on_click=Callback::new(move |_| opened.set(true))>"Invite teammate"</Button>
            <Modal
                opened=opened
                title="Invite teammate"
                size=ModalSize::Sm
                on_close=Callback::new(move |_| opened.set(false))
            >
                <Stack>
                    <TextField
                        label="Email"
                        description="We will send an invite link"
                        placeholder="name@example.com"
                        input_type="email"
                        required=true
                        value=email
                        error=error
                        on_input=Callback::new(move |value| email.set(value))
                        on_blur=Callback::new(move |_| touched.set(true))
                    />
                    <Cluster justify=LayoutJustify::End>
                        <Button variant=ButtonVariant::Quiet on_click=Callback::new(move |_| opened.set(false))>
                            "Cancel"
                        </Button>
                        <Button variant=ButtonVariant::Primary on_click=Callback::new(submit)>
                            "Send"
                        </Button>
                    </Cluster>
                </Stack>
            </Modal>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = showcase_config();
        assert_eq!(config.limit, 3);
        assert_eq!(config.position, NotificationPosition::TopRight);
        assert_eq!(config.auto_close, AutoClose::After(5000));
    }

    #[test]
    fn inventory_spans_five_pages() {
        let rows = inventory_rows();
        assert_eq!(rows.len(), 23);
        assert_eq!(PaginationState::for_items(rows.len(), ROWS_PER_PAGE).total, 5);
        assert_eq!(rows[0], vec!["SKU-1000".to_string(), "Bolt".to_string(), "10".to_string()]);
    }

    #[test]
    fn email_validation_messages() {
        assert_eq!(email_error("  "), Some("Email is required".to_string()));
        assert_eq!(email_error("user@"), Some("Enter a valid email address".to_string()));
        assert_eq!(email_error("user@example.com"), None);
    }
}
