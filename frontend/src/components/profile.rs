use crate::config::use_app_config;
use kopi_shared::PageState;
use kopi_shared::controller::ProfileView;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let controller = use_app_config().profile_controller();
    let page = RwSignal::new(PageState::<ProfileView>::Init);

    page.update(|state| {
        state.start();
    });
    spawn_local(async move {
        let next = controller.load().await;
        page.update(|state| {
            state.settle(next);
        });
    });

    view! {
        <div id="profile" style="font-family: sans-serif; padding: 24px;">
            {move || {
                page.with(|state| match state.rendered() {
                    Some(profile) => {
                        let items = profile
                            .lines()
                            .into_iter()
                            .map(|line| view! { <li>{line}</li> })
                            .collect_view();
                        view! {
                            <h2>{profile.heading}</h2>
                            <ul>{items}</ul>
                        }
                        .into_any()
                    }
                    // 加载中或已跳转登录页：不渲染任何内容
                    None => ().into_any(),
                })
            }}
        </div>
    }
}
