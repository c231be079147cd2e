use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use crate::theme::{StorageError, Theme, ThemeController, ThemeStore, DARK_CLASS, THEME_STORAGE_KEY};

/// The `theme` entry in localStorage. An empty string means nothing is stored.
#[derive(Debug, Clone, Copy)]
struct LocalThemeStore {
    stored: Signal<String>,
    set_stored: WriteSignal<String>,
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Result<Option<Theme>, StorageError> {
        let raw = self.stored.get_untracked();
        if raw.is_empty() {
            return Ok(None);
        }
        Ok(Some(raw.parse()?))
    }

    fn save(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.set_stored.set(theme.to_string());
        Ok(())
    }
}

/// Page-wide theme state, shared with `expect_context`.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
    controller: StoredValue<Option<ThemeController<LocalThemeStore>>>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        let mut next = None;
        self.controller.update_value(|c| {
            if let Some(c) = c {
                next = Some(c.toggle());
            }
        });
        // not initialised yet: flip the visible theme without persisting
        let next = next.unwrap_or_else(|| self.theme.get_untracked().toggled());
        log::debug!("Theme toggled to {next}");
        self.apply(next);
    }

    fn apply(&self, theme: Theme) {
        set_root_class(theme);
        self.theme.set(theme);
    }
}

fn set_root_class(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let res = if theme.is_dark() {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if let Err(e) = res {
        log::warn!("Couldn't update root theme class: {e:?}");
    }
}

/// Server render is dark; the stored or platform theme is applied once hydrated.
pub fn provide_theme() -> ThemeContext {
    let (stored, set_stored, _) = use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
    let prefers_dark = use_preferred_dark();
    let ctx = ThemeContext {
        theme: RwSignal::new(Theme::Dark),
        controller: StoredValue::new(None),
    };

    Effect::new(move |_| {
        let store = LocalThemeStore { stored, set_stored };
        let controller = ThemeController::init(store, prefers_dark.get_untracked());
        let theme = controller.theme();
        ctx.controller.set_value(Some(controller));
        ctx.apply(theme);
    });

    provide_context(ctx);
    ctx
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();
    view! {
        <button
            type="button"
            on:click=move |_| ctx.toggle()
            class="btn-ghost rounded-full p-2 w-9 h-9 justify-center"
            aria-label="Toggle theme"
        >
            {move || if ctx.theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
