use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Modal width tokens.
pub enum ModalSize {
    /// Narrow confirmation dialog.
    Sm,
    /// Default dialog.
    #[default]
    Md,
    /// Wide dialog for forms and tables.
    Lg,
    /// Full-viewport dialog.
    Full,
}

impl ModalSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Full => "full",
        }
    }
}

#[component]
/// Dialog rendered over a dimmed overlay while `opened` is true.
///
/// The modal never closes itself: Escape, overlay clicks, and the close button all request
/// `on_close`, and the owner flips `opened`.
pub fn Modal(
    #[prop(into)] opened: MaybeSignal<bool>,
    on_close: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = ModalSize::Md)] size: ModalSize,
    #[prop(default = true)] close_on_escape: bool,
    #[prop(default = true)] close_on_click_outside: bool,
    #[prop(default = true)] with_close_button: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
        if close_on_escape && opened.get_untracked() && ev.key() == "Escape" {
            ev.prevent_default();
            on_close.call(());
        }
    });
    on_cleanup(move || keydown.remove());

    let title = store_value(title);
    let children = store_value(children);

    view! {
        <Show when=move || opened.get() fallback=|| ()>
            <div
                class="ui-modal-overlay"
                data-ui-primitive="true"
                data-ui-kind="modal-overlay"
                on:click=move |_| {
                    if close_on_click_outside {
                        on_close.call(());
                    }
                }
            >
                <section
                    class=merge_layout_class("ui-modal", layout_class)
                    role="dialog"
                    aria-modal="true"
                    aria-label=title.get_value()
                    data-ui-primitive="true"
                    data-ui-kind="modal"
                    data-ui-size=size.token()
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                >
                    <header data-ui-slot="header">
                        {title.get_value().map(|title| view! { <h2 data-ui-slot="title">{title}</h2> })}
                        {with_close_button.then(|| view! {
                            <IconButton
                                icon=IconName::Dismiss
                                aria_label="Close"
                                ui_slot="close"
                                on_click=Callback::new(move |_| on_close.call(()))
                            />
                        })}
                    </header>
                    <div data-ui-slot="body">{children.with_value(|children| children())}</div>
                </section>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn modal_size_tokens_are_stable() {
        assert_eq!(ModalSize::default().token(), "md");
        assert_eq!(ModalSize::Full.token(), "full");
    }
}
