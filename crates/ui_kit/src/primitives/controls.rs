use ui_headless::slider::{self, RangeThumb, RangeValue, SliderMark};

use super::*;

#[component]
/// Shared button primitive with standardized states and icon slots.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let inert = move || disabled.get() || loading.get();
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            id=id
            aria-label=move || aria_label.get()
            aria-busy=move || bool_token(loading.get())
            title=move || title.get()
            disabled=inert
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-full-width=bool_token(full_width)
            data-ui-state=move || {
                if loading.get() {
                    "loading"
                } else if selected.get() {
                    "selected"
                } else {
                    "idle"
                }
            }
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if inert() {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Show when=move || loading.get() fallback=|| ()>
                <Loader size=IconSize::Sm />
            </Show>
            {leading_icon.map(|icon| view! { <Icon icon=icon size=IconSize::Sm /> })}
            <span data-ui-slot="label">{children()}</span>
            {trailing_icon.map(|icon| view! { <Icon icon=icon size=IconSize::Sm /> })}
        </button>
    }
}

#[component]
/// Shared square icon button used for close controls and compact surface actions.
pub fn IconButton(
    icon: IconName,
    #[prop(default = ButtonVariant::Quiet)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=move || aria_label.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon=icon size=IconSize::Md />
        </button>
    }
}

#[component]
/// Indeterminate loading indicator.
pub fn Loader(
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let size_token = match size {
        IconSize::Sm => "sm",
        IconSize::Md => "md",
        IconSize::Lg => "lg",
    };
    view! {
        <span
            class=merge_layout_class("ui-loader", layout_class)
            role="status"
            aria-label="Loading"
            data-ui-primitive="true"
            data-ui-kind="loader"
            data-ui-size=size_token
        ></span>
    }
}

#[component]
/// Labelled text input with description and validation error slots.
///
/// An error message marks the field invalid (`data-ui-invalid`, `aria-invalid`) and replaces the
/// description.
pub fn TextField(
    #[prop(default = FieldVariant::Standard)] variant: FieldVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    let error = Signal::derive(move || error.get());
    let invalid = move || error.with(Option::is_some);
    view! {
        <label
            class=merge_layout_class("ui-field-group", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-invalid=move || bool_token(invalid())
            data-ui-required=bool_token(required)
        >
            {label.map(|label| view! { <span data-ui-slot="label">{label}</span> })}
            <input
                class="ui-field"
                id=id
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                required=required
                aria-invalid=move || bool_token(invalid())
                prop:value=move || value.get()
                disabled=move || disabled.get()
                data-ui-variant=variant.token()
                data-ui-disabled=move || bool_token(disabled.get())
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(event_target_value(&ev));
                    }
                }
                on:blur=move |ev| {
                    if let Some(on_blur) = on_blur.as_ref() {
                        on_blur.call(ev);
                    }
                }
            />
            {move || match (error.get(), description.clone()) {
                (Some(message), _) => {
                    view! { <span data-ui-slot="error" role="alert">{message}</span> }.into_view()
                }
                (None, Some(description)) => {
                    view! { <span data-ui-slot="description">{description}</span> }.into_view()
                }
                (None, None) => ().into_view(),
            }}
        </label>
    }
}

fn track_value(
    track_ref: NodeRef<html::Div>,
    client_x: i32,
    min: f64,
    max: f64,
    step: f64,
    precision: Option<u32>,
) -> Option<f64> {
    let track = track_ref.get_untracked()?;
    let rect = track.get_bounding_client_rect();
    let ratio = slider::pointer_ratio(f64::from(client_x), rect.left(), rect.width());
    Some(slider::get_change_value(ratio, min, max, step, precision))
}

fn keyboard_steps(key: &str) -> Option<i32> {
    match key {
        "ArrowRight" | "ArrowUp" => Some(1),
        "ArrowLeft" | "ArrowDown" => Some(-1),
        "PageUp" => Some(10),
        "PageDown" => Some(-10),
        _ => None,
    }
}

fn render_marks(
    marks: Vec<SliderMark>,
    min: f64,
    max: f64,
    filled: impl Fn(&SliderMark) -> bool + Copy + 'static,
) -> impl IntoView {
    marks
        .into_iter()
        .map(|mark| {
            let position = slider::get_position(mark.value, min, max);
            let label = mark.label.clone();
            let is_filled = move || filled(&mark);
            view! {
                <span
                    data-ui-slot="mark"
                    data-ui-filled=move || bool_token(is_filled())
                    style:left=format!("{position:.2}%")
                >
                    {label.map(|label| view! { <span data-ui-slot="mark-label">{label}</span> })}
                </span>
            }
        })
        .collect_view()
}

#[component]
/// Single-value slider with pointer dragging, keyboard stepping, and optional marks.
pub fn Slider(
    #[prop(into)] value: MaybeSignal<f64>,
    #[prop(default = 0.0)] min: f64,
    #[prop(default = 100.0)] max: f64,
    #[prop(default = 1.0)] step: f64,
    #[prop(optional)] precision: Option<u32>,
    #[prop(optional)] marks: Vec<SliderMark>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<f64>>,
    #[prop(optional)] on_change_end: Option<Callback<f64>>,
) -> impl IntoView {
    let track_ref = create_node_ref::<html::Div>();
    let dragging = create_rw_signal(false);
    let last_value = store_value(value.get_untracked());
    let position = Signal::derive(move || slider::get_position(value.get(), min, max));

    let emit = move |next: f64| {
        last_value.set_value(next);
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(next);
        }
    };
    let finish = move || {
        if let Some(on_change_end) = on_change_end.as_ref() {
            on_change_end.call(last_value.get_value());
        }
    };

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if !dragging.get_untracked() {
            return;
        }
        if let Some(next) = track_value(track_ref, ev.client_x(), min, max, step, precision) {
            emit(next);
        }
    });
    on_cleanup(move || move_listener.remove());

    let up_listener = window_event_listener(ev::pointerup, move |_| {
        if dragging.get_untracked() {
            dragging.set(false);
            finish();
        }
    });
    on_cleanup(move || up_listener.remove());

    view! {
        <div
            class=merge_layout_class("ui-slider", layout_class)
            data-ui-primitive="true"
            data-ui-kind="slider"
            data-ui-state=move || if dragging.get() { "dragging" } else { "idle" }
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <div
                data-ui-slot="track"
                node_ref=track_ref
                on:pointerdown=move |ev| {
                    if disabled.get_untracked() {
                        return;
                    }
                    ev.prevent_default();
                    dragging.set(true);
                    if let Some(next) = track_value(track_ref, ev.client_x(), min, max, step, precision) {
                        emit(next);
                    }
                }
            >
                <div data-ui-slot="bar" style:width=move || format!("{:.2}%", position.get())></div>
                {render_marks(marks, min, max, move |mark| mark.is_filled(value.get()))}
                <div
                    data-ui-slot="thumb"
                    role="slider"
                    tabindex=move || if disabled.get() { -1 } else { 0 }
                    aria-label=aria_label
                    aria-valuemin=min
                    aria-valuemax=max
                    aria-valuenow=move || value.get()
                    style:left=move || format!("{:.2}%", position.get())
                    on:keydown=move |ev| {
                        if disabled.get_untracked() {
                            return;
                        }
                        let current = value.get_untracked();
                        let next = match ev.key().as_str() {
                            "Home" => Some(min),
                            "End" => Some(max),
                            key => keyboard_steps(key)
                                .map(|steps| slider::step_value(current, steps, min, max, step)),
                        };
                        if let Some(next) = next {
                            ev.prevent_default();
                            emit(next);
                            finish();
                        }
                    }
                ></div>
            </div>
        </div>
    }
}

#[component]
/// Two-thumb range slider; thumbs never cross and stay `min_range` apart.
pub fn RangeSlider(
    #[prop(into)] value: MaybeSignal<RangeValue>,
    #[prop(default = 0.0)] min: f64,
    #[prop(default = 100.0)] max: f64,
    #[prop(default = 1.0)] step: f64,
    #[prop(default = 10.0)] min_range: f64,
    #[prop(optional)] precision: Option<u32>,
    #[prop(optional)] marks: Vec<SliderMark>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<RangeValue>>,
    #[prop(optional)] on_change_end: Option<Callback<RangeValue>>,
) -> impl IntoView {
    let track_ref = create_node_ref::<html::Div>();
    let active_thumb = create_rw_signal::<Option<RangeThumb>>(None);
    let last_value = store_value(value.get_untracked());
    let positions = Signal::derive(move || value.get().positions(min, max));

    let emit = move |thumb: RangeThumb, next: f64| {
        let moved = value
            .get_untracked()
            .move_thumb(thumb, next, min_range, min, max);
        last_value.set_value(moved);
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(moved);
        }
    };
    let finish = move || {
        if let Some(on_change_end) = on_change_end.as_ref() {
            on_change_end.call(last_value.get_value());
        }
    };

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        let Some(thumb) = active_thumb.get_untracked() else {
            return;
        };
        if let Some(next) = track_value(track_ref, ev.client_x(), min, max, step, precision) {
            emit(thumb, next);
        }
    });
    on_cleanup(move || move_listener.remove());

    let up_listener = window_event_listener(ev::pointerup, move |_| {
        if active_thumb.get_untracked().is_some() {
            active_thumb.set(None);
            finish();
        }
    });
    on_cleanup(move || up_listener.remove());

    let thumb_view = move |thumb: RangeThumb| {
        let label = aria_label.clone();
        let thumb_token = match thumb {
            RangeThumb::Start => "start",
            RangeThumb::End => "end",
        };
        let position = move || match thumb {
            RangeThumb::Start => positions.get().0,
            RangeThumb::End => positions.get().1,
        };
        let current = move || {
            let range = value.get();
            match thumb {
                RangeThumb::Start => range.start,
                RangeThumb::End => range.end,
            }
        };
        view! {
            <div
                data-ui-slot="thumb"
                data-ui-thumb=thumb_token
                data-ui-active=move || bool_token(active_thumb.get() == Some(thumb))
                role="slider"
                tabindex=move || if disabled.get() { -1 } else { 0 }
                aria-label=label
                aria-valuemin=min
                aria-valuemax=max
                aria-valuenow=current
                style:left=move || format!("{:.2}%", position())
                on:pointerdown=move |ev| {
                    if disabled.get_untracked() {
                        return;
                    }
                    ev.prevent_default();
                    ev.stop_propagation();
                    active_thumb.set(Some(thumb));
                }
                on:keydown=move |ev| {
                    if disabled.get_untracked() {
                        return;
                    }
                    let now = current();
                    let next = match ev.key().as_str() {
                        "Home" => Some(min),
                        "End" => Some(max),
                        key => keyboard_steps(key)
                            .map(|steps| slider::step_value(now, steps, min, max, step)),
                    };
                    if let Some(next) = next {
                        ev.prevent_default();
                        emit(thumb, next);
                        finish();
                    }
                }
            ></div>
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-slider", layout_class)
            data-ui-primitive="true"
            data-ui-kind="range-slider"
            data-ui-state=move || if active_thumb.get().is_some() { "dragging" } else { "idle" }
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <div
                data-ui-slot="track"
                node_ref=track_ref
                on:pointerdown=move |ev| {
                    if disabled.get_untracked() {
                        return;
                    }
                    ev.prevent_default();
                    if let Some(next) = track_value(track_ref, ev.client_x(), min, max, step, precision) {
                        let thumb = value.get_untracked().nearest_thumb(next);
                        active_thumb.set(Some(thumb));
                        emit(thumb, next);
                    }
                }
            >
                <div
                    data-ui-slot="bar"
                    style:left=move || format!("{:.2}%", positions.get().0)
                    style:width=move || {
                        let (start, end) = positions.get();
                        format!("{:.2}%", end - start)
                    }
                ></div>
                {render_marks(marks, min, max, move |mark| mark.is_filled_in_range(value.get()))}
                {thumb_view(RangeThumb::Start)}
                {thumb_view(RangeThumb::End)}
            </div>
        </div>
    }
}
