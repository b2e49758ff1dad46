use ui_headless::pagination::{PaginationItem, PaginationState};

use super::*;

#[component]
/// Page controls with previous/next buttons, optional first/last edges, and collapsed gaps.
///
/// The component is controlled: `value` is the active page and `on_change` receives the page the
/// user asked for, already clamped to `1..=total`.
pub fn Pagination(
    #[prop(into)] total: MaybeSignal<u32>,
    #[prop(into)] value: MaybeSignal<u32>,
    #[prop(default = 1)] siblings: u32,
    #[prop(default = 1)] boundaries: u32,
    #[prop(optional)] with_edges: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    on_change: Callback<u32>,
) -> impl IntoView {
    let state = create_memo(move |_| {
        let mut state = PaginationState {
            siblings,
            boundaries,
            ..PaginationState::new(total.get())
        };
        state.set_page(value.get());
        state
    });

    let go = move |step: fn(&mut PaginationState)| {
        let mut next = state.get_untracked();
        step(&mut next);
        if next.active != state.get_untracked().active {
            on_change.call(next.active);
        }
    };

    let edge = move |label: &'static str, icon: IconName, step: fn(&mut PaginationState), forward: bool| {
        let blocked = move || {
            let state = state.get();
            disabled.get() || if forward { !state.has_next() } else { !state.has_previous() }
        };
        view! {
            <IconButton
                icon=icon
                size=ButtonSize::Sm
                variant=ButtonVariant::Standard
                aria_label=label
                ui_slot="control"
                disabled=Signal::derive(blocked)
                on_click=Callback::new(move |_| go(step))
            />
        }
    };

    let items = move || {
        let active = state.get().active;
        state
            .get()
            .range()
            .into_iter()
            .map(|item| match item {
                PaginationItem::Page(page) => {
                    let selected = page == active;
                    view! {
                        <button
                            type="button"
                            data-ui-slot="page"
                            data-ui-selected=bool_token(selected)
                            aria-current=selected.then_some("page")
                            disabled=move || disabled.get()
                            on:click=move |_| {
                                if page != state.get_untracked().active {
                                    on_change.call(page);
                                }
                            }
                        >
                            {page}
                        </button>
                    }
                    .into_view()
                }
                PaginationItem::Dots => {
                    view! { <span data-ui-slot="dots" aria-hidden="true">"…"</span> }.into_view()
                }
            })
            .collect_view()
    };

    view! {
        <nav
            class=merge_layout_class("ui-pagination", layout_class)
            aria-label="Pagination"
            data-ui-primitive="true"
            data-ui-kind="pagination"
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {with_edges.then(|| edge("First page", IconName::ChevronsLeft, PaginationState::first, false))}
            {edge("Previous page", IconName::ChevronLeft, PaginationState::previous, false)}
            {items}
            {edge("Next page", IconName::ChevronRight, PaginationState::next, true)}
            {with_edges.then(|| edge("Last page", IconName::ChevronsRight, PaginationState::last, true))}
        </nav>
    }
}
