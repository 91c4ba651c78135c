use crate::config::use_app_config;
use kopi_shared::controller::{CategorySection, WelcomeView};
use kopi_shared::{PageState, text};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn MenuPage() -> impl IntoView {
    let controller = use_app_config().menu_controller();

    let welcome = RwSignal::new(WelcomeView::default());
    let catalog = RwSignal::new(PageState::<Vec<CategorySection>>::Init);

    // 两个请求互不等待，谁先返回谁先渲染
    spawn_local({
        let controller = controller.clone();
        async move {
            let next = controller.welcome().await;
            welcome.set(next);
        }
    });

    catalog.update(|state| {
        state.start();
    });
    spawn_local({
        let controller = controller.clone();
        async move {
            let next = controller.catalog().await;
            catalog.update(|state| {
                state.settle(next);
            });
        }
    });

    let on_logout = move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.logout().await;
        });
    };

    let logout_style = move || {
        if welcome.with(|w| w.show_logout) {
            ""
        } else {
            "display: none;"
        }
    };

    view! {
        <div style="font-family: sans-serif; padding: 24px;">
            <div style="display: flex; gap: 12px; align-items: center;">
                <span id="welcome">{move || welcome.with(|w| w.text.clone())}</span>
                <button id="logoutBtn" style=logout_style on:click=on_logout>
                    {text::LOGOUT_BUTTON}
                </button>
            </div>
            <div id="menu">
                {move || {
                    catalog
                        .with(|state| match state {
                            PageState::Rendered(sections) => sections_view(sections).into_any(),
                            PageState::ErrorDisplayed(msg) => msg.clone().into_any(),
                            _ => text::MENU_LOADING.into_any(),
                        })
                }}
            </div>
        </div>
    }
}

/// 每个分类一个标题加一个列表
fn sections_view(sections: &[CategorySection]) -> impl IntoView + use<> {
    sections
        .iter()
        .map(|section| {
            let items = section
                .lines
                .iter()
                .map(|line| view! { <li>{line.clone()}</li> })
                .collect_view();
            view! {
                <h3>{section.heading.clone()}</h3>
                <ul>{items}</ul>
            }
        })
        .collect_view()
}
