use crate::config::use_app_config;
use kopi_shared::controller::LoginForm;
use kopi_shared::{Credentials, PageState, text};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let controller = use_app_config().login_controller();

    let page = RwSignal::new(PageState::<LoginForm>::Init);
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    // 已登录则直接跳转菜单，表单不会出现
    page.update(|state| {
        state.start();
    });
    spawn_local({
        let controller = controller.clone();
        async move {
            let next = controller.mount().await;
            page.update(|state| {
                state.settle(next);
            });
        }
    });

    let show_form = move || page.with(|state| state.rendered().is_some());
    let redirecting = move || page.with(|state| matches!(state, PageState::Redirected(_)));
    let error_msg = move || page.with(|state| state.rendered().and_then(|f| f.error.clone()));
    let is_submitting = move || page.with(|state| state.rendered().is_some_and(|f| f.submitting));

    view! {
        <Show
            when=show_form
            fallback=move || view! {
                <Show when=redirecting>
                    <div style="font-family: sans-serif; padding: 24px;">
                        <h2>{text::REDIRECTING}</h2>
                    </div>
                </Show>
            }
        >
            {
                let controller = controller.clone();
                let on_submit = move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    page.update(|state| {
                        if let Some(form) = state.rendered_mut() {
                            form.begin_submit();
                        }
                    });

                    let credentials = Credentials {
                        username: username.get_untracked(),
                        password: password.get_untracked(),
                    };
                    let controller = controller.clone();
                    spawn_local(async move {
                        let outcome = controller.submit(&credentials).await;
                        page.update(|state| {
                            if let Some(form) = state.rendered_mut() {
                                form.finish(&outcome);
                            }
                        });
                    });
                };

                view! {
                    <div style="max-width: 320px; margin: 80px auto; font-family: sans-serif;">
                        <h2 style="text-align: center;">{text::LOGIN_TITLE}</h2>
                        <Show when=move || error_msg().is_some()>
                            <div style="color: red; margin-bottom: 12px;">
                                {move || error_msg().unwrap_or_default()}
                            </div>
                        </Show>
                        <form on:submit=on_submit>
                            <div style="margin-bottom: 8px;">
                                <label for="username" style="display: block; margin-bottom: 4px;">
                                    {text::USERNAME_LABEL}
                                </label>
                                <input
                                    id="username"
                                    type="text"
                                    style="width: 100%; padding: 8px;"
                                    on:input=move |ev| set_username.set(event_target_value(&ev))
                                    prop:value=username
                                    required
                                />
                            </div>
                            <div style="margin-bottom: 12px;">
                                <label for="password" style="display: block; margin-bottom: 4px;">
                                    {text::PASSWORD_LABEL}
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    style="width: 100%; padding: 8px;"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    required
                                />
                            </div>
                            <button
                                type="submit"
                                style="width: 100%; padding: 10px;"
                                disabled=is_submitting
                            >
                                {text::LOGIN_BUTTON}
                            </button>
                        </form>
                    </div>
                }
            }
        </Show>
    }
}
